// ABOUTME: HTTP server for guestbook, providing a JSON API and an HTML sign page.
// ABOUTME: Uses Axum with a shared, mutex-guarded store reached through the blocking pool.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;
pub mod web;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, GuestbookConfig};
pub use error::ServerError;
pub use routes::create_router;
