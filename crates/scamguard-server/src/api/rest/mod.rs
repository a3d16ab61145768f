//! REST API implementation
//!
//! - types: Request/response type definitions
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for response types

mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use router::create_router;
pub use types::{AppState, HealthResponse, RulePayload, RulesResponse};
