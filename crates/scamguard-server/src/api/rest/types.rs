//! REST API type definitions

use scamguard_runtime::{AnalysisService, Rule};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One entry of the rule table
#[derive(Debug, Serialize, Deserialize)]
pub struct RulePayload {
    /// Stable rule id (as listed in `triggered_rules`)
    pub id: String,

    /// Human-readable rule name
    pub name: String,

    /// Points added when the rule fires
    pub points: u32,
}

impl From<&Rule> for RulePayload {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id.as_str().to_string(),
            name: rule.name.to_string(),
            points: rule.points,
        }
    }
}

/// Rule table response
#[derive(Debug, Serialize, Deserialize)]
pub struct RulesResponse {
    /// Minimum score for a fraud verdict
    pub fraud_threshold: u32,

    /// Rules in evaluation order
    pub rules: Vec<RulePayload>,
}
