// ABOUTME: Error type for guestbook request handling and its HTTP mapping.
// ABOUTME: Every store failure becomes a logged 500 with a JSON error body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use guestbook_store::StoreError;
use thiserror::Error;

/// Errors that can occur while serving a guestbook request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("guestbook request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
