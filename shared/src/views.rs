use std::fmt::{self, Display};
use boilerplate::Boilerplate;
use html_escaper::Escape;
use crate::catalog::{featured, truncate_title};
use crate::models::{Category, Product, VoteListing};
use crate::tally::{aggregate, Tally};

pub const NO_VOTES_MESSAGE: &str = "No hay votos registrados";
pub const VOTES_ERROR_MESSAGE: &str = "Error al cargar los votos";
pub const CATEGORY_PLACEHOLDER: &str = "Seleccione una categoría";
pub const PRODUCT_LABEL: &str = "Producto";

/// A rendered HTML fragment, ready to replace the content of a page region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    fn render(view: impl Display) -> Self {
        Self(view.to_string().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: String,
    pub price: f64,
    pub img_url: String,
    pub product_url: String,
    pub category_id: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            title: truncate_title(&product.title),
            price: product.price,
            img_url: product.img_url.clone(),
            product_url: product.product_url.clone(),
            category_id: product
                .category_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

#[derive(Boilerplate)]
#[boilerplate(filename = "product-cards.html")]
pub struct ProductCardsHtml {
    pub cards: Vec<ProductCard>,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "category-options.html")]
pub struct CategoryOptionsHtml {
    pub placeholder: &'static str,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyRow {
    pub label: String,
    pub count: usize,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "tally-table.html")]
pub struct TallyTableHtml {
    pub rows: Vec<TallyRow>,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "message.html")]
pub struct MessageHtml {
    pub text: String,
}

pub fn render_message(text: &str) -> Markup {
    Markup::render(MessageHtml { text: text.to_string() })
}

pub fn render_products(products: &[Product], limit: usize) -> Markup {
    Markup::render(ProductCardsHtml {
        cards: featured(products, limit).iter().map(ProductCard::from).collect(),
    })
}

pub fn render_categories(categories: &[Category]) -> Markup {
    Markup::render(CategoryOptionsHtml {
        placeholder: CATEGORY_PLACEHOLDER,
        categories: categories.to_vec(),
    })
}

pub fn tally_rows(tally: &Tally) -> Vec<TallyRow> {
    tally
        .iter()
        .map(|(id, count)| TallyRow {
            label: format!("{PRODUCT_LABEL} {id}"),
            count,
        })
        .collect()
}

pub fn render_tally(tally: &Tally) -> Markup {
    if tally.is_empty() {
        return render_message(NO_VOTES_MESSAGE);
    }
    Markup::render(TallyTableHtml { rows: tally_rows(tally) })
}

/// Results region for a vote store read. A failed read never reaches the aggregator.
pub fn render_vote_listing(listing: &VoteListing) -> Markup {
    if !listing.status {
        return render_message(NO_VOTES_MESSAGE);
    }
    render_tally(&aggregate(&listing.data))
}
