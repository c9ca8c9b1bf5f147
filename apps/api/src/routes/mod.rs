pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parser::handlers as parse_handlers;
use crate::scoring::handlers as score_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Parsing API
        .route(
            "/api/v1/resumes/parse",
            post(parse_handlers::handle_parse_upload),
        )
        .route(
            "/api/v1/resumes/parse-text",
            post(parse_handlers::handle_parse_text),
        )
        // Scoring API
        .route("/api/v1/resumes/score", post(score_handlers::handle_score))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
