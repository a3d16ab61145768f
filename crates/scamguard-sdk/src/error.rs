//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Analysis endpoint answered with a non-success status
    #[error("Detection Engine Error! Status: {0}")]
    Status(u16),

    /// Network failure while talking to the analysis endpoint
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not a valid list of analyzed reports
    #[error("Invalid analysis payload: {0}")]
    Decode(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Quiz state machine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Operation not allowed in the current state
    #[error("Cannot {action} while quiz is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// Submit was requested before an option was selected
    #[error("No option selected")]
    NoSelection,

    /// Selected option index does not exist
    #[error("Option {index} out of range (question has {available} options)")]
    OptionOutOfRange { index: usize, available: usize },
}

impl From<scamguard_core::CoreError> for SdkError {
    fn from(err: scamguard_core::CoreError) -> Self {
        SdkError::Decode(err.to_string())
    }
}
