pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::ui::handlers as page;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(page::handle_index))
        .route("/upload", post(page::handle_upload_form))
        .route("/match", post(page::handle_match_form))
        // Analysis API
        .route(
            "/api/v1/analysis",
            get(handlers::handle_get_analysis).post(handlers::handle_upload),
        )
        .route("/api/v1/analysis/jd-match", post(handlers::handle_jd_match))
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route("/api/v1/score", post(handlers::handle_score))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
