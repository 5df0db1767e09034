//! Document record types.
//!
//! A [`PolicyDocument`] represents one ingested source file: its
//! normalized full text, any tables extracted from it, and basic file
//! metadata. Records are assembled by the ingestion loaders and not
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The recognized source formats.
///
/// Files with any other extension are silently skipped by the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A PDF file. Text is extracted per page (with OCR fallback) and
    /// tables are detected and rendered separately.
    Pdf,
    /// A Word document. Non-empty paragraphs joined with newlines.
    Docx,
    /// An email container (`.eml` or `.msg`). Plain-text body only.
    Email,
}

impl DocumentKind {
    /// Map a file extension (without the dot, any case) to a kind.
    ///
    /// Returns `None` for unsupported extensions.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "eml" | "msg" => Some(Self::Email),
            _ => None,
        }
    }

    /// The lowercase name used in serialized records and metadata.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Email => "email",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One table extracted from a PDF page, rendered to pipe-delimited text.
///
/// The `clause_id` is a pure function of `(source, page, first 100
/// characters of text)`; re-ingesting the same file yields identical
/// IDs, which downstream stores rely on for upsert semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    /// 1-based page number the table was detected on.
    pub page: u32,

    /// 0-based index of the table within that page.
    pub table_index: u32,

    /// Normalized pipe-delimited rendering, header row first.
    pub text: String,

    /// Deterministic content hash identifying this table across runs.
    pub clause_id: String,
}

/// Represents one ingested source document.
///
/// # Examples
///
/// ```rust
/// use clausewise_core::types::{DocumentKind, PolicyDocument};
///
/// let doc = PolicyDocument::new("policy.pdf", DocumentKind::Pdf, "Grace period of 30 days")
///     .with_metadata("file_size", 2048);
/// assert_eq!(doc.source, "policy.pdf");
/// assert!(doc.tables.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyDocument {
    /// Unique identifier for this record.
    pub id: Uuid,

    /// Source filename, unique within one ingestion run.
    pub source: String,

    /// Source format.
    pub kind: DocumentKind,

    /// Whitespace-normalized full text of the document.
    pub full_text: String,

    /// Tables extracted from the document, in page order.
    ///
    /// Always empty for non-PDF sources.
    pub tables: Vec<TableRecord>,

    /// Document metadata (source path, file size, content type, etc.).
    pub metadata: HashMap<String, serde_json::Value>,
}

impl PolicyDocument {
    /// Create a new document record with the given source, kind, and text.
    pub fn new<S, T>(source: S, kind: DocumentKind, full_text: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            kind,
            full_text: full_text.into(),
            tables: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Attach extracted tables to this record.
    #[must_use]
    pub fn with_tables(mut self, tables: Vec<TableRecord>) -> Self {
        self.tables = tables;
        self
    }

    /// Add or update a metadata entry.
    #[must_use]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Get a metadata value by key.
    #[must_use]
    pub fn get_metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    /// Get a metadata value as a string.
    #[must_use]
    pub fn get_metadata_string(&self, key: &str) -> Option<String> {
        self.metadata.get(key)?.as_str().map(String::from)
    }

    /// Get the document text size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.full_text.len()
    }

    /// Check if the document has no text content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_extension("docx"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(
            DocumentKind::from_extension("eml"),
            Some(DocumentKind::Email)
        );
        assert_eq!(
            DocumentKind::from_extension("MSG"),
            Some(DocumentKind::Email)
        );
        assert_eq!(DocumentKind::from_extension("xyz"), None);
    }

    #[test]
    fn test_document_creation() {
        let doc = PolicyDocument::new("a.pdf", DocumentKind::Pdf, "Test content");
        assert_eq!(doc.source, "a.pdf");
        assert_eq!(doc.full_text, "Test content");
        assert!(doc.tables.is_empty());
        assert!(doc.metadata.is_empty());
        assert!(!doc.is_empty());
        assert_eq!(doc.size(), 12);
    }

    #[test]
    fn test_document_metadata() {
        let doc = PolicyDocument::new("a.docx", DocumentKind::Docx, "Test")
            .with_metadata("content_type", "application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            .with_metadata("file_size", 42);

        assert!(doc.get_metadata_string("content_type").is_some());
        assert_eq!(
            doc.get_metadata("file_size"),
            Some(&serde_json::Value::Number(42.into()))
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&DocumentKind::Email).unwrap();
        assert_eq!(json, "\"email\"");
    }
}
