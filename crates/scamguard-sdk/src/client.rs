//! Analysis endpoint client
//!
//! A single GET per fetch. No timeout, no retry: a failed request surfaces
//! immediately as an error.

use crate::error::{Result, SdkError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scamguard_core::AnalyzedReport;
use tracing::{debug, warn};

/// Path of the analysis endpoint, relative to the server base URL
pub const ANALYZE_PATH: &str = "/v1/analyze";

/// Source of analyzed reports for the presentation layer
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Fetch the complete list of analyzed reports
    async fn fetch_analysis(&self) -> Result<Vec<AnalyzedReport>>;
}

/// HTTP client for the analysis endpoint
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    /// Create a client for the server at `base_url` (e.g. "http://127.0.0.1:8080")
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let endpoint = format!("{}{}", base_url.as_ref().trim_end_matches('/'), ANALYZE_PATH);
        Self::with_endpoint(endpoint)
    }

    /// Create a client for a full endpoint URL
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint URL this client requests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn fetch_analysis(&self) -> Result<Vec<AnalyzedReport>> {
        debug!("Fetching analysis from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Analysis endpoint returned status {}", status);
            return Err(SdkError::Status(status.as_u16()));
        }

        let reports: Vec<AnalyzedReport> = response
            .json()
            .await
            .map_err(|e| SdkError::Decode(e.to_string()))?;

        for report in &reports {
            report.validate()?;
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_base_url() {
        let client = HttpAnalysisClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.endpoint(), "http://127.0.0.1:8080/v1/analyze");

        let client = HttpAnalysisClient::new("http://localhost:9000");
        assert_eq!(client.endpoint(), "http://localhost:9000/v1/analyze");
    }

    #[test]
    fn test_with_endpoint() {
        let client = HttpAnalysisClient::with_endpoint("http://example.com/api/analyze-fraud");
        assert_eq!(client.endpoint(), "http://example.com/api/analyze-fraud");
    }
}
