// ABOUTME: Entry point for the guestbook binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and serves the guestbook until Ctrl-C.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use guestbook_server::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "guestbook=info,guestbook_server=info,tower_http=debug",
                )
            }),
        )
        .init();

    let config = cli::Cli::parse().into_config()?;
    let guestbook = config
        .open_guestbook()
        .with_context(|| format!("failed to prepare {}", config.file.display()))?;
    tracing::info!("guestbook file: {}", guestbook.path().display());

    let state = Arc::new(AppState::new(guestbook, config.max_entry_bytes));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("guestbook listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("guestbook shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
