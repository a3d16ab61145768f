//! Analysis pipeline
//!
//! Fetches every report from a source and scores each one independently.
//! Source failures propagate untouched; nothing is retried or cached.

use crate::engine::RuleEngine;
use crate::error::Result;
use crate::source::ReportSource;
use scamguard_core::AnalyzedReport;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Score every report of `source` with `engine`, preserving source order
pub async fn run_analysis(
    source: &dyn ReportSource,
    engine: &RuleEngine,
) -> Result<Vec<AnalyzedReport>> {
    let reports = source.fetch_reports().await?;
    Ok(reports.iter().map(|report| engine.analyze(report)).collect())
}

/// Analysis service bound to a report source
#[derive(Clone)]
pub struct AnalysisService {
    source: Arc<dyn ReportSource>,
    engine: RuleEngine,
}

impl AnalysisService {
    /// Create a service with the built-in rule table
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self {
            source,
            engine: RuleEngine::new(),
        }
    }

    /// Rule engine used by this service
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Description of the underlying source
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Run one analysis over the full source
    pub async fn run(&self) -> Result<Vec<AnalyzedReport>> {
        let start = Instant::now();

        match run_analysis(self.source.as_ref(), &self.engine).await {
            Ok(analyzed) => {
                let flagged = analyzed.iter().filter(|a| a.is_fraud).count();
                info!(
                    total = analyzed.len(),
                    flagged,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Analysis completed"
                );
                Ok(analyzed)
            }
            Err(e) => {
                error!(source = %self.source.describe(), "Analysis failed: {}", e);
                Err(e)
            }
        }
    }
}
