// ABOUTME: JSON handlers for reading and signing the guestbook.
// ABOUTME: A signing request answers with the full updated list, newest first.

use axum::Json;
use axum::extract::State;

use crate::app_state::SharedState;
use crate::error::ServerResult;

/// GET /api/entries - All signatures, newest first.
pub async fn list_entries(State(state): State<SharedState>) -> ServerResult<Json<Vec<String>>> {
    Ok(Json(state.list_entries().await?))
}

/// POST /api/entries - Sign with the raw UTF-8 request body, then return the list.
/// An empty body signs nothing.
pub async fn append_entry(
    State(state): State<SharedState>,
    body: String,
) -> ServerResult<Json<Vec<String>>> {
    if !body.is_empty() {
        tracing::debug!("appending {} byte signature", body.len());
    }
    state.append_entry(body).await?;
    Ok(Json(state.list_entries().await?))
}
