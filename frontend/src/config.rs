use shared::page::{PageConfig, CATEGORIES_URL, PRODUCTS_URL, PRODUCT_CARD_LIMIT};

pub struct Config {
    pub api_base_url: &'static str,
    pub products_url: &'static str,
    pub categories_url: &'static str,
    pub demo_url: &'static str,
    pub product_card_limit: usize,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            products_url: PRODUCTS_URL,
            categories_url: CATEGORIES_URL,
            demo_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            product_card_limit: PRODUCT_CARD_LIMIT,
        }
    }

    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            products_url: self.products_url.into(),
            categories_url: self.categories_url.into(),
            product_card_limit: self.product_card_limit,
        }
    }
}

pub const CONFIG: Config = Config::new();
