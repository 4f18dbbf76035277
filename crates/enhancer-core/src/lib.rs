//! Enhancer Core Library
//!
//! This crate provides the domain models, error types, and configuration
//! shared by the enhancer API service and its client.

pub mod config;
pub mod error;
pub mod models;
pub mod progress;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    EnhanceOptions, EnhanceResponse, ProcessingProgress, ProcessingResult, ProgressStage,
    UpscaleModel,
};
pub use progress::ProgressObserver;
