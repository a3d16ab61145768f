//! Raw fraud report

use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A single fraud/scam incident record to be scored.
///
/// Text fields are never absent: a missing or `null` field deserializes to
/// the empty string, which keeps the rule engine total over partial input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier
    pub id: i64,

    /// Free-text category label (e.g. "Phishing", "Investment Fraud")
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub report_type: String,

    /// Free-text phrase reported by the victim
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: String,

    /// URL involved in the incident, or empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,

    /// Where the incident was reported from, or empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

impl Report {
    /// Create a report with the given category and keywords
    pub fn new(id: i64, report_type: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            id,
            report_type: report_type.into(),
            keywords: keywords.into(),
            url: String::new(),
            location: String::new(),
        }
    }

    /// Set the incident URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the incident location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Check that no two reports share an id
pub fn ensure_unique_ids(reports: &[Report]) -> Result<()> {
    let mut seen = HashSet::with_capacity(reports.len());
    for report in reports {
        if !seen.insert(report.id) {
            return Err(CoreError::DuplicateId(report.id));
        }
    }
    Ok(())
}
