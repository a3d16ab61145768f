//! API module
//!
//! REST endpoints for the analysis server.

pub mod rest;

pub use rest::create_router;
