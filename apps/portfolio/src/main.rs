mod blocks;
mod catalog;
mod clipboard;
mod config;
mod contact;
mod content;
mod errors;
mod export;
mod models;
mod notify;
mod routes;
mod state;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::relay::EmailJsRelay;
use crate::content::ContentStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::views::ViewEngine;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let content = ContentStore::embedded()?;
    info!(
        "Content loaded: {} posts, {} projects",
        content.posts.len(),
        content.projects.len()
    );

    let views = ViewEngine::new(config.base_path.clone())?;

    let relay = EmailJsRelay::new(config.relay.clone());
    info!("Contact relay initialized (endpoint: {})", config.relay.api_url);

    let state = AppState {
        content: Arc::new(content),
        views: Arc::new(views),
        relay: Arc::new(relay),
    };

    let app = build_router(state, &config.base_path)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    if config.base_path.is_empty() {
        info!("Listening on {addr}");
    } else {
        info!("Listening on {addr} under {}", config.base_path);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
