//! API error surface.
//!
//! The single client-visible error kind is "not found" for an unmatched
//! identifier, rendered as a 404 with a `detail` body. Malformed bodies and
//! non-integer path ids are rejected by axum's own extractors before a
//! handler runs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No record matched the requested identifier.
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
        }
    }
}
