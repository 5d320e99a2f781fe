pub mod routes;
pub mod store;
pub mod cors;
pub mod error;
pub mod catchers;
pub mod config;
pub use shared::{models::*, error::*};

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable},
    cors::CORS,
    routes::{all_options, list_votes, record_vote, AppState},
};

/// The vote store API mounted under `/api`, without static file serving.
pub fn build_rocket(state: AppState, cors: CORS) -> Rocket<Build> {
    rocket::build()
        .attach(cors)
        .manage(state)
        .mount("/api", routes![record_vote, list_votes, all_options])
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
}

#[cfg(test)]
mod tests;
