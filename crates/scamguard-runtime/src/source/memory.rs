//! In-memory report source
//!
//! Holds a fixed list of reports. Used for the built-in demonstration data
//! and in tests.

use super::ReportSource;
use crate::error::Result;
use scamguard_core::{types::ensure_unique_ids, Report};

/// In-memory report source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    reports: Vec<Report>,
}

impl MemorySource {
    /// Create a source serving the given reports.
    ///
    /// Ids are not checked; use [`MemorySource::try_new`] for untrusted lists.
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    /// Create a source, rejecting lists with duplicate ids
    pub fn try_new(reports: Vec<Report>) -> Result<Self> {
        ensure_unique_ids(&reports)?;
        Ok(Self::new(reports))
    }

    /// Source serving the six built-in demonstration reports
    pub fn demo() -> Self {
        Self::new(demo_reports())
    }

    /// Number of reports held
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Check if the source holds no reports
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[async_trait::async_trait]
impl ReportSource for MemorySource {
    async fn fetch_reports(&self) -> Result<Vec<Report>> {
        Ok(self.reports.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} reports)", self.reports.len())
    }
}

/// The built-in demonstration reports
pub fn demo_reports() -> Vec<Report> {
    vec![
        Report::new(1, "Phishing", "urgent password reset")
            .with_url("http://bank-login.xyz")
            .with_location("Mumbai"),
        Report::new(2, "General Inquiry", "checking my account balance").with_location("Delhi"),
        Report::new(3, "Investment Fraud", "guaranteed 50% profit daily")
            .with_url("http://cryptogold.online")
            .with_location("Bangalore"),
        Report::new(4, "Tech Support Scam", "windows license expired call now")
            .with_location("Pune"),
        Report::new(5, "Phishing", "your account will be closed soon")
            .with_url("https://support-login-secure.com")
            .with_location("Chennai"),
        Report::new(6, "Genuine Report", "looking for banking hours").with_location("Kolkata"),
    ]
}
