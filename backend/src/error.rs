//! API-level error type shared by all handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Everything a handler can fail with. Validation failures carry the full
/// violation list and are serialized as a JSON array, so clients can show
/// every problem at once; the reconciliation engine itself never errors on
/// data shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("document validation failed")]
    Validation(Vec<String>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Serialization(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(violations) => HttpResponse::BadRequest().json(violations),
            ApiError::NotFound(message) => HttpResponse::NotFound().body(message.clone()),
            ApiError::BadRequest(message) => HttpResponse::BadRequest().body(message.clone()),
            other => HttpResponse::ServiceUnavailable().body(other.to_string()),
        }
    }
}
