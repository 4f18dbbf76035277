//! Enhancer API Library
//!
//! This crate provides the HTTP proxy route, middleware wiring, and
//! application setup for the image-enhancement service.

// Module declarations
mod api_doc;
mod handlers;
mod validation;

// Public modules
pub mod backend;
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use backend::BackendClient;
pub use error::ErrorResponse;
pub use state::AppState;
