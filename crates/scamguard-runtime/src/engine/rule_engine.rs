//! Rule engine
//!
//! Pure scoring of a single report: no I/O, no shared state, no randomness.

use super::rules::{Rule, RuleId, DEFAULT_RULES};
use scamguard_core::{AnalyzedReport, Report, SYSTEM_ACCURACY};
use tracing::debug;

/// Minimum score for a report to be flagged as fraud
pub const FRAUD_THRESHOLD: u32 = 50;

/// Points added to the score to obtain the display confidence
pub const CONFIDENCE_MARGIN: u32 = 5;

/// Upper bound of the display confidence
pub const MAX_CONFIDENCE: u32 = 100;

/// Raw outcome of evaluating the rule table against one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleScore {
    /// Sum of the points of every triggered rule
    pub score: u32,

    /// Triggered rules, in evaluation order
    pub triggered: Vec<RuleId>,
}

impl RuleScore {
    /// Whether the score reaches the fraud threshold
    pub fn is_fraud(&self) -> bool {
        self.score >= FRAUD_THRESHOLD
    }

    /// Display confidence: `min(100, score + 5)`
    pub fn confidence(&self) -> f64 {
        (self.score + CONFIDENCE_MARGIN).min(MAX_CONFIDENCE) as f64
    }
}

/// Additive rule engine
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Create an engine with the built-in rule table
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule and sum the points of those that fire
    pub fn score(&self, report: &Report) -> RuleScore {
        let mut score = 0;
        let mut triggered = Vec::new();

        for rule in &self.rules {
            if rule.matches(report) {
                score += rule.points;
                triggered.push(rule.id);
            }
        }

        RuleScore { score, triggered }
    }

    /// Score a report and attach the verdict
    pub fn analyze(&self, report: &Report) -> AnalyzedReport {
        let result = self.score(report);

        debug!(
            report_id = report.id,
            score = result.score,
            triggered = ?result.triggered,
            "Report analyzed"
        );

        AnalyzedReport {
            report: report.clone(),
            is_fraud: result.is_fraud(),
            confidence_score: result.confidence(),
            system_accuracy: SYSTEM_ACCURACY,
            fraud_score: result.score,
            triggered_rules: result
                .triggered
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}

/// Analyze a report with the built-in rule table
pub fn analyze(report: &Report) -> AnalyzedReport {
    RuleEngine::new().analyze(report)
}
