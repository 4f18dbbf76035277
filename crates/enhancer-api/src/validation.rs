//! Upload validation helpers for the proxy route.
//!
//! Checks run in contract order and the first failure wins; each maps to a
//! 400 response with a fixed human-readable message.

use enhancer_core::AppError;

pub const MISSING_IMAGE_MESSAGE: &str = "No image file provided";
pub const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Please upload an image.";

/// Validate that the declared media type is an image. A missing declaration
/// counts as invalid.
pub fn validate_content_type(content_type: &str) -> Result<(), AppError> {
    if !content_type.starts_with("image/") {
        return Err(AppError::InvalidInput(INVALID_TYPE_MESSAGE.to_string()));
    }
    Ok(())
}

/// Validate the uploaded byte size against the configured maximum.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size too large. Maximum {}MB allowed.",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}
