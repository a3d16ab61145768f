//! ScamGuard Core - Core types and definitions for the ScamGuard analyzer
//!
//! This crate provides the fundamental types shared by the rule engine,
//! the HTTP server and the presentation layer:
//! - Report types (raw input and analyzed output)
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{AnalyzedReport, Report, SYSTEM_ACCURACY};
