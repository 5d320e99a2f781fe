use roxmltree::{Document, Node};
use crate::error::{Error, Result};
use crate::models::{Category, Product};

pub const MAX_TITLE_CHARS: usize = 20;
pub const ELLIPSIS: &str = "...";

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        format!("{}{}", title.chars().take(MAX_TITLE_CHARS).collect::<String>(), ELLIPSIS)
    } else {
        title.to_string()
    }
}

pub fn featured(products: &[Product], limit: usize) -> &[Product] {
    &products[..products.len().min(limit)]
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

fn child_text(category: Node<'_, '_>, tag: &str, position: usize) -> Result<String> {
    category
        .descendants()
        .find(|n| n.has_tag_name(tag))
        .map(|n| text_content(n).trim().to_string())
        .ok_or_else(|| Error::malformed(format!("category #{position} has no <{tag}> element")))
}

/// Reads every `category` element of the categories document, in document order.
pub fn parse_categories(xml: &str) -> Result<Vec<Category>> {
    let document = Document::parse(xml).map_err(|e| Error::malformed(e.to_string()))?;

    document
        .descendants()
        .filter(|n| n.has_tag_name("category"))
        .enumerate()
        .map(|(i, category)| {
            Ok(Category {
                id: child_text(category, "id", i + 1)?,
                name: child_text(category, "name", i + 1)?,
            })
        })
        .collect()
}
