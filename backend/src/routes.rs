use rocket::{State, get, post, http::Status, serde::json::Json};
use tracing::{error, info, instrument};
use shared::{models::*, validation::require_product_id};
use crate::{
    error::ApiError,
    store::VoteRepository,
};

pub const VOTE_RECORDED_MESSAGE: &str = "Voto registrado correctamente";

pub struct AppState {
    pub store: Box<dyn VoteRepository>,
}

impl AppState {
    pub fn new(store: impl VoteRepository + 'static) -> Self {
        Self { store: Box::new(store) }
    }
}

#[get("/votes")]
pub async fn list_votes(state: &State<AppState>) -> (Status, Json<VoteListing>) {
    match state.store.all().await {
        Ok(records) => (Status::Ok, Json(records.into_iter().map(Vote::from).collect())),
        Err(e) => {
            error!("Failed to list votes: {}", e);
            (Status::InternalServerError, Json(VoteListing::unavailable()))
        }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, request))]
#[post("/votes", format = "json", data = "<request>")]
pub async fn record_vote(
    state: &State<AppState>,
    request: Json<NewVote>,
) -> Result<Json<VoteReceipt>, ApiError> {
    let request = request.into_inner();
    let product_id = require_product_id(request.product_id.as_ref().map(ProductId::as_str))?;

    let record = state.store.insert(&product_id).await?;
    info!("Recorded vote {} for product {}", record.id, record.product_id);

    Ok(Json(VoteReceipt::accepted(VOTE_RECORDED_MESSAGE)))
}
