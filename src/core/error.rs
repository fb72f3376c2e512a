//! Error types for the intake surface.
//!
//! - [`IntakeError`] - Reported to the invalid-files callback, never returned
//! - [`ConfigError`] - Configuration parsing failures

use thiserror::Error;

/// Failure reported through the invalid-files callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// At least one file in the batch has an extension outside the accept list
    #[error("Invalid file upload.")]
    InvalidFileUpload,
}

/// Failure to load an [`IntakeConfig`](crate::models::IntakeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_upload_message() {
        assert_eq!(
            IntakeError::InvalidFileUpload.to_string(),
            "Invalid file upload."
        );
    }
}
