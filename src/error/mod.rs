// Error types for vl-convert-service

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("POST body is required")]
    MissingBody,

    #[error("conversion failed: {0}")]
    Conversion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Font registration failed: {0}")]
    FontRegistration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert ServiceError to HTTP responses for Axum. Every error body is plain
// text; there is no structured error format.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::MissingBody | ServiceError::Conversion(_) => StatusCode::BAD_REQUEST,
            ServiceError::Config(_) | ServiceError::FontRegistration(_) | ServiceError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain")],
            self.to_string(),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
