//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scamguard_runtime::RuntimeError;
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Report source failed during analysis
    SourceError(String),

    /// Internal server error
    InternalError(String),

    /// Not found
    NotFound(String),
}

impl ServerError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::SourceError(_) => StatusCode::BAD_GATEWAY,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::SourceError(msg) => write!(f, "Source error: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            ServerError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            ServerError::SourceError(msg)
            | ServerError::InternalError(msg)
            | ServerError::NotFound(msg) => msg,
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<RuntimeError> for ServerError {
    fn from(err: RuntimeError) -> Self {
        ServerError::SourceError(err.to_string())
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = ServerError::SourceError("connection refused".to_string());
        assert_eq!(err.to_string(), "Source error: connection refused");
    }

    #[test]
    fn test_internal_error_display() {
        let err = ServerError::InternalError("bind failed".to_string());
        assert_eq!(err.to_string(), "Internal error: bind failed");
    }

    #[test]
    fn test_not_found_display() {
        let err = ServerError::NotFound("/v2/analyze".to_string());
        assert_eq!(err.to_string(), "Not found: /v2/analyze");
    }

    #[test]
    fn test_runtime_error_conversion() {
        let runtime_err = RuntimeError::Source("upstream down".to_string());
        let server_err: ServerError = runtime_err.into();
        assert!(matches!(server_err, ServerError::SourceError(_)));
        assert!(server_err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_startup_failure_is_internal() {
        let server_err: ServerError = anyhow::anyhow!("report file unreadable").into();

        assert!(matches!(server_err, ServerError::InternalError(_)));
        assert_eq!(server_err.to_string(), "Internal error: report file unreadable");
    }

    #[test]
    fn test_file_source_failures_map_to_bad_gateway() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "reports.json");
        let server_err: ServerError = RuntimeError::from(io_err).into();
        assert_eq!(server_err.status_code(), StatusCode::BAD_GATEWAY);

        let parse_err = RuntimeError::Parse("expected sequence".to_string());
        let server_err: ServerError = parse_err.into();
        assert_eq!(server_err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_into_response_status_codes() {
        assert_eq!(
            ServerError::SourceError("x".to_string()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ServerError::InternalError("x".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::NotFound("x".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
