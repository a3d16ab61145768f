//! Report sources
//!
//! Sources supply the ordered sequence of raw reports that an analysis run
//! scores. No pagination: every call returns the complete list.

pub mod file;
mod memory;

pub use file::FileSource;
pub use memory::{demo_reports, MemorySource};

use crate::error::Result;
use scamguard_core::Report;

/// Trait for report sources
#[async_trait::async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch all reports, in source order
    async fn fetch_reports(&self) -> Result<Vec<Report>>;

    /// Short description used in logs
    fn describe(&self) -> String;
}
