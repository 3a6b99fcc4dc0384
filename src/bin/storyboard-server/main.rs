//! Storyboard server: static UI, planning API and same-origin image proxy.
//!
//! Usage:
//!   storyboard-server [--port 3000] [--static-dir public] [--proxy-timeout-secs 60]

mod config;
mod proxy;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use proxy::ImageProxy;
use routes::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let default_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if !config.static_dir.is_dir() {
        tracing::warn!(dir = %config.static_dir.display(), "Static directory not found");
    }

    let proxy = ImageProxy::new(config.proxy_timeout()).context("Failed to build HTTP client")?;
    let app = create_router(Arc::new(AppState { proxy }), &config.static_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Storyboard server running on http://127.0.0.1:{}", config.port);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
