//! The boundary record consumed by downstream retrieval.
//!
//! Chunking, embedding, and vector search live outside this workspace.
//! What comes back from them is exactly one shape: a chunk of text plus
//! its metadata. Earlier incarnations of this pipeline probed retrieved
//! objects for attributes at runtime; this type pins the contract down
//! to the two fields anything downstream actually reads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A chunk of document text as returned by an external retriever.
///
/// # Examples
///
/// ```rust
/// use clausewise_core::types::RetrievedChunk;
///
/// let chunk = RetrievedChunk::new("Waiting period: 36 months")
///     .with_metadata("source", "policy.pdf")
///     .with_metadata("doc_chunk_id", "policy.pdf_chunk_0");
/// assert_eq!(chunk.page_content, "Waiting period: 36 months");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedChunk {
    /// The chunk's text content.
    pub page_content: String,

    /// Metadata carried alongside the chunk (source, chunk id,
    /// clause id for table-derived chunks, etc.).
    pub metadata: HashMap<String, serde_json::Value>,
}

impl RetrievedChunk {
    /// Create a chunk with the given content and empty metadata.
    pub fn new<S: Into<String>>(page_content: S) -> Self {
        Self {
            page_content: page_content.into(),
            metadata: HashMap::new(),
        }
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

    /// Get a metadata value as a string.
    #[must_use]
    pub fn get_metadata_string(&self, key: &str) -> Option<String> {
        self.metadata.get(key)?.as_str().map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_roundtrip() {
        let chunk = RetrievedChunk::new("clause text").with_metadata("source", "a.pdf");
        let json = serde_json::to_string(&chunk).unwrap();
        let back: RetrievedChunk = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chunk);
        assert_eq!(back.get_metadata_string("source"), Some("a.pdf".into()));
    }
}
