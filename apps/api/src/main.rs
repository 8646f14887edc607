mod collector;
mod config;
mod describer;
mod directory;
mod errors;
mod llm_client;
mod models;
mod reports;
mod routes;
mod scoring;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::describer::RetryPolicy;
use crate::directory::DgisClient;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileKeyValueStore, TableStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Places API v{}", env!("CARGO_PKG_VERSION"));

    let tables = TableStore::new(&config.data_dir);
    let context_store = Arc::new(FileKeyValueStore::new(tables.meta_dir()));
    info!("Data directory: {}", config.data_dir.display());

    let directory = Arc::new(DgisClient::new(config.dgis_api_key.clone()));

    let llm = Arc::new(GeminiClient::new(config.gemini_api_key.clone())?);
    info!(
        "LLM client initialized (model: {}, concurrency: {})",
        llm_client::MODEL,
        config.generation_concurrency
    );

    let state = AppState {
        config: config.clone(),
        tables,
        context_store,
        directory,
        llm,
        retry_policy: RetryPolicy::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
