//! Error types for the Lector proxy surface
//!
//! The proxy exposes nothing structured to callers: an HTTP status plus a
//! short plain-text body. Causes are logged server-side only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No URL provided")]
    MissingUrl,

    #[error("Error fetching EPUB")]
    UpstreamFetch(#[source] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingUrl => (StatusCode::BAD_REQUEST, "No URL provided"),
            AppError::UpstreamFetch(e) => {
                tracing::error!("Error fetching EPUB: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching EPUB")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };

        (status, message).into_response()
    }
}
