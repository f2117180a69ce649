mod auth;
mod config;
mod dashboard;
mod errors;
mod models;
mod progress;
mod roadmap;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::roadmap::Catalog;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Verdant API v{}", env!("CARGO_PKG_VERSION"));
    if config.uses_dev_secret() {
        warn!("JWT_SECRET not set; signing tokens with the development secret");
    }

    let store = FileStore::open(&config.data_dir)?;
    info!("Local store at {}", store.path().display());

    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .with_context(|| format!("creating {}", config.uploads_dir.display()))?;

    let catalog = Arc::new(Catalog::builtin());
    info!(
        "Catalog loaded: {} roadmaps, {} nodes",
        catalog.roadmaps().len(),
        catalog.node_count()
    );

    let state = AppState::new(config.clone(), catalog, Arc::new(store))?;

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .public_url
                .parse::<HeaderValue>()
                .context("PUBLIC_URL is not a valid origin")?,
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
