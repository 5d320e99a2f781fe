pub mod error;
pub mod models;
pub mod validation;
pub mod tally;
pub mod catalog;
pub mod views;
pub mod page;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use validation::*;
pub use tally::{aggregate, Tally};
pub use views::{Markup, render_tally, render_vote_listing, render_products, render_categories};
pub use page::{initialize_page, submit_vote, DataGateway, VoteStore, PageConfig, PageUpdate, DomOp, DomTarget, Notice};
