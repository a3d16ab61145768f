//! API endpoint handlers

use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::Uri, Json};
use scamguard_core::AnalyzedReport;
use scamguard_runtime::engine::FRAUD_THRESHOLD;
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Analysis endpoint
///
/// Scores every report of the configured source on each call.
#[axum::debug_handler]
pub(super) async fn analyze(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalyzedReport>>, ServerError> {
    info!("Received analysis request");

    let analyzed = state.service.run().await?;

    Ok(Json(analyzed))
}

/// Rule table endpoint
pub(super) async fn rules(State(state): State<AppState>) -> Json<RulesResponse> {
    Json(RulesResponse {
        fraud_threshold: FRAUD_THRESHOLD,
        rules: state
            .service
            .engine()
            .rules()
            .iter()
            .map(RulePayload::from)
            .collect(),
    })
}

/// Fallback for unknown routes
pub(super) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}
