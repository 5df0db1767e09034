//! Document loaders for policy files.
//!
//! This module implements the core `Loader` trait for single files and
//! directories, dispatching by file extension to the per-format
//! readers.

pub mod directory;
pub mod file;

pub use directory::DirectoryLoader;
pub use file::FileLoader;

use clausewise_core::DocumentKind;
use std::path::Path;

use crate::error::{IngestionError, Result};

/// Utility functions for document loading.
pub mod utils {
    use super::{DocumentKind, IngestionError, Path, Result};

    /// The MIME type recorded in document metadata for each kind,
    /// refined by extension for the two email container formats.
    #[must_use]
    pub fn content_type(path: &Path, kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentKind::Email => {
                let is_msg = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("msg"));
                if is_msg {
                    "application/vnd.ms-outlook"
                } else {
                    "message/rfc822"
                }
            }
        }
    }

    /// Get the file size in bytes.
    pub async fn file_size(path: &Path) -> Result<u64> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| IngestionError::file_not_found(path.display().to_string()))?;
        Ok(metadata.len())
    }

    /// The filename component of a path, used as the document source
    /// key.
    #[must_use]
    pub fn source_name(path: &Path) -> String {
        path.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// Configuration for loader behavior.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Maximum file size to process (in bytes).
    pub max_file_size: Option<u64>,

    /// Whether a failing document aborts the batch or is recorded and
    /// skipped.
    pub continue_on_error: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(100 * 1024 * 1024), // 100MB default limit
            continue_on_error: true,
        }
    }
}

impl LoaderConfig {
    /// Create a new loader configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = Some(size);
        self
    }

    /// Set whether to continue on per-document errors.
    #[must_use]
    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(
            utils::content_type(Path::new("a.pdf"), DocumentKind::Pdf),
            "application/pdf"
        );
        assert_eq!(
            utils::content_type(Path::new("a.eml"), DocumentKind::Email),
            "message/rfc822"
        );
        assert_eq!(
            utils::content_type(Path::new("a.MSG"), DocumentKind::Email),
            "application/vnd.ms-outlook"
        );
    }

    #[test]
    fn test_source_name() {
        assert_eq!(utils::source_name(Path::new("/data/policies/a.pdf")), "a.pdf");
    }
}
