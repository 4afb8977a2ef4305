mod analysis;
mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod random;
mod recruiter;
mod routes;
mod state;
mod upload;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::engine::SHORTLIST_THRESHOLD;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Platform API v{}", env!("CARGO_PKG_VERSION"));

    // Build app state (catalog, random source, skill extractor)
    let state = AppState::from_config(config.clone())?;
    info!(
        roles = state.catalog.career_templates.len(),
        skill_patterns = state.catalog.skill_patterns.len(),
        shortlist_threshold = SHORTLIST_THRESHOLD,
        "Mock catalog ready"
    );

    let cors = build_cors(&config.cors_origins)?;

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the configured frontend origins; an empty list is permissive.
fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        info!("CORS: permissive");
        return Ok(CorsLayer::permissive());
    }

    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("CORS origin '{origin}' is not a valid header value"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("CORS: {} allowed origins", allowed.len());

    Ok(CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any))
}
