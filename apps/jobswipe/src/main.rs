mod config;
mod errors;
mod jobs;
mod matching;
mod models;
mod routes;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::JSearchClient;
use crate::matching::WeightedMatchScorer;
use crate::routes::build_router;
use crate::session::{ClientLauncher, SessionController, UxTiming};
use crate::state::AppState;

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

    info!("Starting JobSwipe v{}", env!("CARGO_PKG_VERSION"));

    if config.jsearch_api_key.is_none() {
        warn!("JSEARCH_API_KEY is not set; every job fetch will fall back to demo jobs");
    }

    let job_source = JSearchClient::new(
        config.jsearch_base_url.clone(),
        config.jsearch_api_host.clone(),
        config.jsearch_api_key.clone(),
        config.job_fetch_timeout,
    )
    .context("Failed to build JSearch HTTP client")?;
    info!("Job feed: {}", config.jsearch_base_url);

    let controller = SessionController::new(
        Arc::new(job_source),
        Arc::new(ClientLauncher),
        Arc::new(WeightedMatchScorer::default()),
        UxTiming {
            apply_delay: config.apply_delay,
            notice_duration: config.confirm_notice,
        },
    );

    let state = AppState {
        controller,
        config: config.clone(),
    };

    // Permissive CORS so a locally served front end can drive the session
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
