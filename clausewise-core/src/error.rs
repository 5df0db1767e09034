//! Error types for the Clausewise pipeline.
//!
//! This module provides the shared error taxonomy used across the
//! workspace. Extraction degradations (failed OCR, missing tables) are
//! handled locally by the components that encounter them and never
//! surface here; only per-document and configuration failures do.

use thiserror::Error;

/// Core error types for the Clausewise pipeline.
#[derive(Error, Debug)]
pub enum ClausewiseError {
    /// I/O related errors (file reading, subprocess spawning, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Text or table extraction errors for a single document
    #[error("Extraction error: {message}")]
    Extraction {
        /// Detailed error message
        message: String,
    },

    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message
        message: String,
    },

    /// Input validation errors
    #[error("Validation error: {message}")]
    Validation {
        /// Detailed error message
        message: String,
    },

    /// Resource not found errors
    #[error("Not found: {resource}")]
    NotFound {
        /// Name of the missing resource
        resource: String,
    },

    /// Internal pipeline errors
    #[error("Internal error: {message}")]
    Internal {
        /// Detailed error message
        message: String,
    },
}

/// Result type alias for Clausewise operations.
pub type Result<T> = std::result::Result<T, ClausewiseError>;

impl ClausewiseError {
    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(message: S) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error.
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Convert from anyhow::Error for convenience
impl From<anyhow::Error> for ClausewiseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClausewiseError::extraction("bad page stream");
        assert_eq!(err.to_string(), "Extraction error: bad page stream");

        let err = ClausewiseError::not_found("policies/");
        assert_eq!(err.to_string(), "Not found: policies/");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ClausewiseError = io_err.into();
        assert!(matches!(err, ClausewiseError::Io(_)));
    }
}
