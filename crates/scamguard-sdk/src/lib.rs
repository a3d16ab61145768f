//! ScamGuard SDK
//!
//! Client-side building blocks for the ScamGuard analyzer:
//! - `client`: fetches analyzed reports from the analysis endpoint
//! - `dashboard`: application state, filtering and card projection
//! - `quiz`: the cyber-security quiz state machine

pub mod client;
pub mod dashboard;
pub mod error;
pub mod quiz;

// Re-export main types
pub use client::{AnalysisClient, HttpAnalysisClient};
pub use dashboard::{filter_reports, AlertCard, BoardView, Dashboard, LoadState, TypeFilter};
pub use error::{QuizError, Result, SdkError};
pub use quiz::{Question, Quiz, QuizState, QuizView, Rating};

// Re-export commonly used types from dependencies
pub use scamguard_core::{AnalyzedReport, Report};
