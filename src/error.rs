//! Custom error types for the registration wizard
//!
//! Field-level validation problems are not errors here: they live in the
//! wizard's `ErrorSet`. This module covers operational failures (I/O, storage,
//! submission hand-off) using thiserror.

use thiserror::Error;

/// The main error type for registration operations
#[derive(Error, Debug)]
pub enum EsticError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A record file that is not well-formed JSON or YAML
    #[error("Parse error: {0}")]
    Parse(String),

    /// A wizard operation was rejected because of invalid input or state
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The submission collaborator rejected or failed to accept a record
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl EsticError {
    /// Create a "not found" error for submissions
    pub fn submission_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Submission",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for EsticError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EsticError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for registration operations
pub type EsticResult<T> = Result<T, EsticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EsticError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = EsticError::submission_not_found("reg-1234abcd");
        assert_eq!(err.to_string(), "Submission not found: reg-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_submission_error() {
        let err = EsticError::Submission("store unavailable".into());
        assert_eq!(err.to_string(), "Submission failed: store unavailable");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EsticError = io_err.into();
        assert!(matches!(err, EsticError::Io(_)));
    }
}
