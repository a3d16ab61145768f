//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{routing::get, Router};
use scamguard_runtime::AnalysisService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(service: Arc<AnalysisService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/health", get(health))
        .route("/v1/analyze", get(analyze))
        .route("/v1/rules", get(rules))
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
