//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Report source failed to produce reports
    #[error("Report source error: {0}")]
    Source(String),

    /// I/O error while reading a report file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report file content could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Report file has an extension we cannot read
    #[error("Unsupported report file format: {0}")]
    UnsupportedFormat(String),

    /// Reports violate a data model invariant
    #[error("Invalid reports: {0}")]
    InvalidReports(#[from] scamguard_core::CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

impl From<serde_json::Error> for RuntimeError {
    fn from(err: serde_json::Error) -> Self {
        RuntimeError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for RuntimeError {
    fn from(err: serde_yaml::Error) -> Self {
        RuntimeError::Parse(err.to_string())
    }
}
