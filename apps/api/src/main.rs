mod ats;
mod browse;
mod config;
mod directory;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::HttpBackend;
use crate::config::Config;
use crate::directory::PhoneDirectory;
use crate::routes::build_router;
use crate::state::{AppState, FitPolicySet};

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

    info!("Starting Provework recruiter API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the ATS backend client
    let backend = Arc::new(HttpBackend::new(config.backend_base_url.clone()));
    info!("ATS backend client initialized ({})", config.backend_base_url);

    // Initialize the phone directory collaborator
    let directory = PhoneDirectory::new(config.directory_base_url.clone());
    info!("Phone directory client initialized");

    // Build app state
    let state = AppState {
        backend,
        directory,
        config: config.clone(),
        policies: FitPolicySet::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
