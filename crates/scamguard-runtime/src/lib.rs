//! ScamGuard Runtime - Rule engine and analysis pipeline
//!
//! This crate scores fraud reports against the built-in rule table and
//! runs that scoring over every report of a [`ReportSource`].

pub mod analysis;
pub mod engine;
pub mod error;
pub mod source;

// Re-export main types
pub use analysis::{run_analysis, AnalysisService};
pub use engine::{analyze, Rule, RuleEngine, RuleId, RuleScore};
pub use error::{Result, RuntimeError};
pub use source::{FileSource, MemorySource, ReportSource};
