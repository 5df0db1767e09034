//! Prelude module for convenient imports.
//!
//! # Examples
//!
//! ```rust
//! use clausewise_core::prelude::*;
//!
//! let doc = PolicyDocument::new("policy.pdf", DocumentKind::Pdf, "full text");
//! assert_eq!(doc.kind.as_str(), "pdf");
//! ```

// Re-export core error types
pub use crate::error::{ClausewiseError, Result};

// Re-export all data types
pub use crate::types::{DocumentKind, PolicyDocument, RetrievedChunk, TableRecord};

// Re-export core traits
pub use crate::traits::{LoadFailure, LoadOutcome, Loader};
