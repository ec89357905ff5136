// ABOUTME: Route definitions for the guestbook HTTP server.
// ABOUTME: Assembles web, API and health routes behind a body cap and request tracing.

use axum::Router;
use axum::extract::{DefaultBodyLimit, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::app_state::SharedState;
use crate::{api, web};

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    let max_entry_bytes = state.max_entry_bytes;
    Router::new()
        .route(
            "/",
            get(web::index)
                .post(web::sign)
                .layer(DefaultBodyLimit::max(web::form_body_limit(max_entry_bytes))),
        )
        .route(
            "/api/entries",
            get(api::entries::list_entries).post(api::entries::append_entry),
        )
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_entry_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Reads the store so a broken file shows up here too.
async fn health(State(state): State<SharedState>) -> Response {
    match state.count_entries().await {
        Ok(entries) => axum::Json(serde_json::json!({ "status": "ok", "entries": entries }))
            .into_response(),
        Err(e) => e.into_response(),
    }
}
