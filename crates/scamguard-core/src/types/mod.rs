//! Report type definitions
//!
//! - `report`: raw fraud reports as produced by a report source
//! - `analyzed`: reports enriched with the rule engine verdict

pub mod analyzed;
pub mod report;

pub use analyzed::{AnalyzedReport, SYSTEM_ACCURACY};
pub use report::{ensure_unique_ids, Report};
