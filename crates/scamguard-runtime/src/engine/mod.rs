//! Rule engine module
//!
//! Scores reports by additive point accumulation over a fixed rule table.

pub mod rule_engine;
pub mod rules;

#[cfg(test)]
mod tests;

// Re-export for convenience
pub use rule_engine::{
    analyze, RuleEngine, RuleScore, CONFIDENCE_MARGIN, FRAUD_THRESHOLD, MAX_CONFIDENCE,
};
pub use rules::{Rule, RuleId, DEFAULT_RULES};
