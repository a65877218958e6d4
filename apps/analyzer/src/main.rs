mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod session;
mod state;
mod ui;

use anyhow::{bail, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::SkillList;
use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Load the reference skill list once; it is read-only from here on
    let skills = match &config.skills_path {
        Some(path) => {
            let skills = SkillList::from_file(path)?;
            info!("Skill list loaded from {} ({} skills)", path.display(), skills.len());
            skills
        }
        None => {
            let skills = SkillList::builtin();
            info!("Built-in skill list loaded ({} skills)", skills.len());
            skills
        }
    };
    if skills.is_empty() {
        bail!("Skill list is empty; nothing to match resumes against");
    }

    if config.jd_dedup_keywords {
        info!("Duplicate job-description keywords will be removed before scoring");
    }

    // Build app state
    let state = AppState::new(config.clone(), skills, Arc::new(PdfTextExtractor));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
