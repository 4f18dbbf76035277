//! Error types module
//!
//! All failures in the proxy are unified under the `AppError` enum.
//! `ErrorMetadata` lets each error self-describe its HTTP presentation so
//! the API crate can render a consistent JSON body without matching on
//! variants at every call site.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like backend timeouts
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "BACKEND_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Backend timeout: {0}")]
    Timeout(String),

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) | AppError::PayloadTooLarge(_) => 400,
            AppError::Timeout(_) => 408,
            AppError::Backend { status, .. } => *status,
            AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Backend { .. } => "BACKEND_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Timeout(_) => "Request timeout. Image processing took too long.".to_string(),
            AppError::Backend { message, .. } => message.clone(),
            // Internal detail is logged, never surfaced
            AppError::Internal(_) => "Failed to process image. Please try again.".to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::Timeout(_) | AppError::Backend { .. } => LogLevel::Warn,
            AppError::Internal(_) => LogLevel::Error,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON parsing error: {}", err))
    }
}
