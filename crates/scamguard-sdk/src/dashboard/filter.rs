//! Report type filtering

use scamguard_core::AnalyzedReport;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Filter value meaning "no filter"
pub const ALL_TYPES: &str = "all";

/// Filter over the report `type` field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// Keep every report
    #[default]
    All,
    /// Keep reports whose type equals this label exactly
    Exact(String),
}

impl TypeFilter {
    /// Whether a report passes this filter
    pub fn matches(&self, report: &AnalyzedReport) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Exact(report_type) => report.report_type() == report_type.as_str(),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_TYPES {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Exact(s.to_string()))
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str(ALL_TYPES),
            TypeFilter::Exact(report_type) => f.write_str(report_type),
        }
    }
}

/// Reports passing `filter`, in their original order
pub fn filter_reports<'a>(
    reports: &'a [AnalyzedReport],
    filter: &TypeFilter,
) -> Vec<&'a AnalyzedReport> {
    reports.iter().filter(|report| filter.matches(report)).collect()
}
