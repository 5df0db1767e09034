//! Error types for the ingestion crate.

use thiserror::Error;

/// Errors that can occur during document loading and extraction.
#[derive(Error, Debug)]
pub enum IngestionError {
    /// IO error occurred while reading files or spawning subprocesses.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a document container (DOCX zip, email envelope).
    #[error("Document parsing error: {message}")]
    DocumentParsing {
        /// Error message describing the parsing issue.
        message: String,
    },

    /// Error extracting text from binary documents (PDF, Word, etc.).
    #[error("Text extraction error: {message}")]
    TextExtraction {
        /// Error message describing the extraction issue.
        message: String,
    },

    /// Unsupported file format.
    #[error("Unsupported file format: {format}")]
    UnsupportedFormat {
        /// The unsupported file format.
        format: String,
    },

    /// File not found or inaccessible.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Directory not found or inaccessible.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// Path to the directory that was not found.
        path: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Core framework error.
    #[error("Core error: {0}")]
    Core(#[from] clausewise_core::ClausewiseError),

    /// Generic error with custom message.
    #[error("Ingestion error: {message}")]
    Generic {
        /// Generic error message.
        message: String,
    },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestionError>;

impl IngestionError {
    /// Create a new document parsing error.
    pub fn document_parsing<S: Into<String>>(message: S) -> Self {
        Self::DocumentParsing {
            message: message.into(),
        }
    }

    /// Create a new text extraction error.
    pub fn text_extraction<S: Into<String>>(message: S) -> Self {
        Self::TextExtraction {
            message: message.into(),
        }
    }

    /// Create a new unsupported format error.
    pub fn unsupported_format<S: Into<String>>(format: S) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a new file not found error.
    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new directory not found error.
    pub fn directory_not_found<S: Into<String>>(path: S) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new generic error.
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }
}

// Convert from anyhow::Error for convenience
impl From<anyhow::Error> for IngestionError {
    fn from(err: anyhow::Error) -> Self {
        Self::Generic {
            message: err.to_string(),
        }
    }
}

// Convert to ClausewiseError for trait compatibility
impl From<IngestionError> for clausewise_core::ClausewiseError {
    fn from(err: IngestionError) -> Self {
        match err {
            IngestionError::Io(e) => Self::Io(e),
            IngestionError::Core(e) => e,
            IngestionError::Configuration { message } => Self::Configuration { message },
            IngestionError::FileNotFound { path } | IngestionError::DirectoryNotFound { path } => {
                Self::NotFound { resource: path }
            }
            IngestionError::DocumentParsing { message }
            | IngestionError::TextExtraction { message } => Self::Extraction { message },
            _ => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
