//! Analyzed report (rule engine output)

use super::report::Report;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Accuracy figure attached to every analyzed report.
///
/// This is a display label, not a statistic measured against labeled data.
pub const SYSTEM_ACCURACY: f64 = 90.1;

/// A report enriched with the rule engine verdict.
///
/// Derived fresh on every analysis; never written back to the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedReport {
    /// The original report fields
    #[serde(flatten)]
    pub report: Report,

    /// True iff the accumulated score reached the fraud threshold
    #[serde(alias = "isFraud")]
    pub is_fraud: bool,

    /// Display confidence percentage in [0, 100]
    #[serde(alias = "confidenceScore")]
    pub confidence_score: f64,

    /// Constant accuracy label (see [`SYSTEM_ACCURACY`])
    #[serde(alias = "systemAccuracy")]
    pub system_accuracy: f64,

    /// Raw accumulated rule score
    #[serde(default, alias = "fraudScore")]
    pub fraud_score: u32,

    /// Ids of the rules that fired, in evaluation order
    #[serde(default, alias = "triggeredRules")]
    pub triggered_rules: Vec<String>,
}

impl AnalyzedReport {
    /// Category label of the underlying report
    pub fn report_type(&self) -> &str {
        &self.report.report_type
    }

    /// Check the value ranges of the derived fields
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.confidence_score) {
            return Err(CoreError::InvalidValue(format!(
                "confidence_score {} of report {} is outside [0, 100]",
                self.confidence_score, self.report.id
            )));
        }
        if !self.system_accuracy.is_finite() {
            return Err(CoreError::InvalidValue(format!(
                "system_accuracy of report {} is not a finite number",
                self.report.id
            )));
        }
        Ok(())
    }
}
