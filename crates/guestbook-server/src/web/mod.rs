// ABOUTME: Web UI route handlers serving the guestbook page via Askama templates.
// ABOUTME: Signatures are HTML-escaped here, at render time, never in the store.

use askama::Template;
use askama_derive_axum::IntoResponse as AskamaIntoResponse;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::app_state::SharedState;

/// The guestbook page: sign form plus every signature, newest first.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub entries: Vec<String>,
    pub max_entry_bytes: usize,
    pub error: Option<String>,
}

/// Form data for signing the guestbook. A missing field signs nothing.
#[derive(Deserialize)]
pub struct SignForm {
    #[serde(default)]
    pub entry: String,
}

/// GET / - Render the guestbook page.
pub async fn index(State(state): State<SharedState>) -> Response {
    render_page(&state).await
}

/// Body cap for the form route. Urlencoding can triple a signature's size,
/// so the decoded signature is checked against the real cap in `sign`.
pub fn form_body_limit(max_entry_bytes: usize) -> usize {
    max_entry_bytes
        .saturating_mul(3)
        .saturating_add("entry=".len())
}

/// POST / - Sign from form data, then render the updated page.
pub async fn sign(State(state): State<SharedState>, Form(form): Form<SignForm>) -> Response {
    if form.entry.len() > state.max_entry_bytes {
        let message = format!(
            "Your signature is {} bytes; the limit is {} bytes.",
            form.entry.len(),
            state.max_entry_bytes
        );
        return render_page_with(&state, StatusCode::PAYLOAD_TOO_LARGE, Some(message)).await;
    }

    if !form.entry.is_empty() {
        tracing::debug!("appending {} byte signature from form", form.entry.len());
    }
    if let Err(e) = state.append_entry(form.entry).await {
        tracing::error!("failed to sign guestbook: {}", e);
        return error_page(&state, "Your signature could not be saved.");
    }
    render_page(&state).await
}

async fn render_page(state: &SharedState) -> Response {
    render_page_with(state, StatusCode::OK, None).await
}

async fn render_page_with(state: &SharedState, status: StatusCode, error: Option<String>) -> Response {
    match state.list_entries().await {
        Ok(entries) => (
            status,
            IndexTemplate {
                entries,
                max_entry_bytes: state.max_entry_bytes,
                error,
            },
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to read guestbook: {}", e);
            error_page(state, "The guestbook could not be read.")
        }
    }
}

fn error_page(state: &SharedState, message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        IndexTemplate {
            entries: Vec::new(),
            max_entry_bytes: state.max_entry_bytes,
            error: Some(message.to_string()),
        },
    )
        .into_response()
}
