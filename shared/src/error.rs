use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

pub const STORE_UNAVAILABLE_MESSAGE: &str = "No se pudo contactar con el servidor de votos";

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Remote endpoint returned a non-success response")]
    FetchFailed,
    #[error("Network request failed")]
    Transport,
    #[error("Malformed payload")]
    MalformedPayload,
    #[error("Vote store unavailable")]
    StoreUnavailable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn fetch_failed(url: &str, status: u16) -> Self {
        Self::with_details(ErrorCode::FetchFailed, format!("GET {url} failed"), format!("status {status}"))
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Transport, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedPayload, message)
    }

    /// The vote store answered with an error status and no readable body.
    pub fn store_unavailable(status: u16) -> Self {
        Self::with_details(ErrorCode::StoreUnavailable, STORE_UNAVAILABLE_MESSAGE, format!("status {status}"))
    }

    /// Classifies a vote store reply whose body could not be decoded.
    pub fn unreadable_store_reply(status: u16, cause: impl fmt::Display) -> Self {
        if (200..300).contains(&status) {
            Self::malformed(cause.to_string())
        } else {
            Self::store_unavailable(status)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
