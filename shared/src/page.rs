//! Page controller: turns gateway and store responses into DOM write
//! instructions and user notices without touching a live document.

use futures::join;
use log::{debug, error, warn};
use crate::catalog::parse_categories;
use crate::error::{ErrorCode, Result};
use crate::models::{Product, ProductId, VoteListing, VoteReceipt};
use crate::validation::require_product_id;
use crate::views::{render_categories, render_message, render_products, render_vote_listing, Markup, VOTES_ERROR_MESSAGE};

pub const PRODUCTS_URL: &str = "https://data-dawm.github.io/datum/reseller/products.json";
pub const CATEGORIES_URL: &str = "https://data-dawm.github.io/datum/reseller/categories.xml";
pub const PRODUCT_CARD_LIMIT: usize = 6;
pub const TOAST_VISIBLE_CLASS: &str = "md:block";

pub const FORM_VOTING_ID: &str = "form_voting";
pub const SELECT_PRODUCT_ID: &str = "select_product";
pub const DEMO_ID: &str = "demo";

/// Remote source of the product list (JSON) and the category tree (XML text).
#[allow(async_fn_in_trait)]
pub trait DataGateway {
    async fn fetch_list(&self, url: &str) -> Result<Vec<Product>>;
    async fn fetch_tree(&self, url: &str) -> Result<String>;
}

#[allow(async_fn_in_trait)]
pub trait VoteStore {
    async fn record_vote(&self, product_id: &ProductId) -> Result<VoteReceipt>;
    async fn list_votes(&self) -> Result<VoteListing>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub products_url: String,
    pub categories_url: String,
    pub product_card_limit: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            products_url: PRODUCTS_URL.into(),
            categories_url: CATEGORIES_URL.into(),
            product_card_limit: PRODUCT_CARD_LIMIT,
        }
    }
}

/// Page regions the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomTarget {
    Products,
    Categories,
    Results,
    Toast,
}

impl DomTarget {
    pub const fn id(self) -> &'static str {
        match self {
            DomTarget::Products => "products-container",
            DomTarget::Categories => "categories",
            DomTarget::Results => "results",
            DomTarget::Toast => "toast-interactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOp {
    Replace { target: DomTarget, markup: Markup },
    AddClass { target: DomTarget, class: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
    Console(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUpdate {
    pub ops: Vec<DomOp>,
    pub notices: Vec<Notice>,
}

impl PageUpdate {
    fn replace(target: DomTarget, markup: Markup) -> Self {
        Self { ops: vec![DomOp::Replace { target, markup }], notices: Vec::new() }
    }

    fn notice(notice: Notice) -> Self {
        Self { ops: Vec::new(), notices: vec![notice] }
    }

    fn merge(mut self, other: PageUpdate) -> Self {
        self.ops.extend(other.ops);
        self.notices.extend(other.notices);
        self
    }

    pub fn markup_for(&self, target: DomTarget) -> Option<&Markup> {
        self.ops.iter().find_map(|op| match op {
            DomOp::Replace { target: t, markup } if *t == target => Some(markup),
            _ => None,
        })
    }
}

async fn products_section(gateway: &impl DataGateway, config: &PageConfig) -> PageUpdate {
    match gateway.fetch_list(&config.products_url).await {
        Ok(products) => {
            debug!("Fetched {} products", products.len());
            PageUpdate::replace(DomTarget::Products, render_products(&products, config.product_card_limit))
        }
        Err(e) => PageUpdate::notice(Notice::Console(format!("Error en fetchProducts: {e}"))),
    }
}

async fn categories_section(gateway: &impl DataGateway, config: &PageConfig) -> PageUpdate {
    let categories = gateway
        .fetch_tree(&config.categories_url)
        .await
        .and_then(|xml| parse_categories(&xml));

    match categories {
        Ok(categories) => {
            debug!("Parsed {} categories", categories.len());
            PageUpdate::replace(DomTarget::Categories, render_categories(&categories))
        }
        Err(e) if e.code == ErrorCode::FetchFailed => {
            warn!("Category fetch failed: {e}");
            PageUpdate::notice(Notice::Alert("Error en la carga de categorías".into()))
        }
        Err(e) => {
            warn!("Category load failed: {e}");
            PageUpdate::notice(Notice::Alert(format!("Error al cargar categorías: {}", e.message)))
        }
    }
}

async fn results_section(store: &impl VoteStore) -> PageUpdate {
    match store.list_votes().await {
        Ok(listing) => {
            debug!("Vote store returned status={} with {} votes", listing.status, listing.data.len());
            PageUpdate::replace(DomTarget::Results, render_vote_listing(&listing))
        }
        Err(e) => PageUpdate::replace(DomTarget::Results, render_message(VOTES_ERROR_MESSAGE))
            .merge(PageUpdate::notice(Notice::Console(format!("Error al mostrar votos: {e}")))),
    }
}

/// Runs the product, category and results renders concurrently and collects
/// their writes. Never fails: every error becomes a notice or a placeholder.
pub async fn initialize_page(
    gateway: &impl DataGateway,
    store: &impl VoteStore,
    config: &PageConfig,
) -> PageUpdate {
    let toast = PageUpdate {
        ops: vec![DomOp::AddClass { target: DomTarget::Toast, class: TOAST_VISIBLE_CLASS }],
        notices: Vec::new(),
    };

    let (products, categories, results) = join!(
        products_section(gateway, config),
        categories_section(gateway, config),
        results_section(store),
    );

    toast.merge(products).merge(categories).merge(results)
}

/// Records a vote for the selected product. The returned alert carries the
/// store's message whether or not the store accepted the vote.
pub async fn submit_vote(store: &impl VoteStore, selected: Option<&str>) -> Notice {
    let product_id = match require_product_id(selected) {
        Ok(id) => id,
        Err(e) => return Notice::Alert(e.to_string()),
    };

    match store.record_vote(&product_id).await {
        Ok(receipt) => {
            if !receipt.status {
                warn!("Vote for product {product_id} rejected: {}", receipt.message);
            }
            Notice::Alert(receipt.message)
        }
        Err(e) => {
            error!("Vote for product {product_id} failed: {e}");
            Notice::Alert(e.message)
        }
    }
}
