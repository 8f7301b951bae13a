pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::copywriting::handlers;
use crate::errors::AppError;
use crate::showcase::handlers as showcase;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No route matches this path".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Copywriting API
        .route(
            "/api/v1/descriptions/generate",
            post(handlers::handle_generate_description),
        )
        .route(
            "/api/v1/descriptions/optimize",
            post(handlers::handle_optimize_description),
        )
        .route(
            "/api/v1/descriptions/variants",
            post(handlers::handle_generate_variants),
        )
        // Showcase data
        .route("/api/v1/dashboard", get(showcase::handle_dashboard))
        .route("/api/v1/templates", get(showcase::handle_list_templates))
        .fallback(not_found)
        .with_state(state)
}
