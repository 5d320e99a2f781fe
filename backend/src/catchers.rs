use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Invalid request parameters.".into(),
        status: 400
    })
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    let error_msg = match req.uri().path().segments().last() {
        Some("votes") => "Votes must be sent as JSON.",
        _ => "The requested resource was not found."
    };

    Json(ErrorMessage {
        error: error_msg.into(),
        status: 404
    })
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Malformed vote payload.".into(),
        status: 422
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "An internal server error occurred.".into(),
        status: 500
    })
}
