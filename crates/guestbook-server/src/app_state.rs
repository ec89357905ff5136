// ABOUTME: Shared application state for the guestbook HTTP server.
// ABOUTME: Holds the single store and runs its blocking file operations off the async executor.

use std::sync::Arc;

use guestbook_store::GuestBook;

use crate::error::ServerResult;

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub guestbook: Arc<GuestBook>,
    /// Largest request body accepted by the signing routes.
    pub max_entry_bytes: usize,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(guestbook: GuestBook, max_entry_bytes: usize) -> Self {
        Self {
            guestbook: Arc::new(guestbook),
            max_entry_bytes,
        }
    }

    /// Append one signature on the blocking pool.
    pub async fn append_entry(&self, text: String) -> ServerResult<()> {
        let book = Arc::clone(&self.guestbook);
        tokio::task::spawn_blocking(move || book.append(&text)).await??;
        Ok(())
    }

    /// List all signatures, newest first, on the blocking pool.
    pub async fn list_entries(&self) -> ServerResult<Vec<String>> {
        let book = Arc::clone(&self.guestbook);
        Ok(tokio::task::spawn_blocking(move || book.list()).await??)
    }

    pub async fn count_entries(&self) -> ServerResult<usize> {
        let book = Arc::clone(&self.guestbook);
        Ok(tokio::task::spawn_blocking(move || book.count()).await??)
    }
}
