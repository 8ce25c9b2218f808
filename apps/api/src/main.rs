mod config;
mod errors;
mod experience;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::experience::SystemClock;
use crate::profile::vocabulary::Vocabulary;
use crate::profile::ProfileExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &config.vocabulary_path {
        Some(path) => {
            let vocabulary = Vocabulary::from_path(path)?;
            info!("Vocabulary loaded from {}", path.display());
            vocabulary
        }
        None => Vocabulary::default(),
    };
    if vocabulary.education_keywords.is_empty() {
        warn!("No education keywords configured; education date ranges will be counted");
    }
    info!(
        skills = vocabulary.skills.len(),
        firms = vocabulary.firms.len(),
        education_keywords = vocabulary.education_keywords.len(),
        "Vocabulary ready"
    );

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(ProfileExtractor::new(vocabulary)),
        clock: Arc::new(SystemClock),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the upload frontend's host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
