mod composer;
mod config;
mod db;
mod errors;
mod export;
mod llm_client;
mod models;
mod routes;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::TemplateRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration errors abort startup before anything is opened
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Joke Studio API v{}", env!("CARGO_PKG_VERSION"));

    // Open storage and make sure the schema exists
    let store = db::connect(&config.database_url).await?;
    store.initialize().await?;

    let templates = TemplateRegistry::builtin();
    info!("Loaded {} humor templates", templates.list().len());

    let composer = composer::from_config(&config);

    let state = AppState {
        store,
        composer,
        templates,
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
