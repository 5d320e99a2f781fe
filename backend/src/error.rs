use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ValidationError, VoteReceipt};
use thiserror::Error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No se pudo registrar el voto")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::Store(_) => Status::InternalServerError,
        }
    }
}

/// Failures still answer with a receipt so clients can show the message as-is.
impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        rocket::Response::build_from(Json(VoteReceipt::rejected(self.to_string())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
