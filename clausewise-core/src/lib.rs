//! # Clausewise Core
//!
//! Core types, traits, and error handling for the Clausewise document
//! ingestion pipeline.
//!
//! Clausewise ingests insurance policy documents (PDF, DOCX, email) and
//! produces normalized, immutable document records for downstream
//! chunking and indexing. This crate provides the foundational building
//! blocks shared across the workspace:
//!
//! - **Data structures**: [`PolicyDocument`], [`TableRecord`], and the
//!   downstream [`RetrievedChunk`] boundary record
//! - **Core traits**: [`Loader`] for document sources
//! - **Error handling**: [`ClausewiseError`] with context-aware variants
//!
//! ## Quick Start
//!
//! ```rust
//! use clausewise_core::prelude::*;
//!
//! let doc = PolicyDocument::new("policy.pdf", DocumentKind::Pdf, "Sum insured: 5 lakh")
//!     .with_metadata("file_size", 1024);
//! assert_eq!(doc.kind, DocumentKind::Pdf);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod prelude;
pub mod traits;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{ClausewiseError, Result};
pub use types::{DocumentKind, PolicyDocument, RetrievedChunk, TableRecord};

// Re-export traits for convenience
pub use traits::*;

/// Version information for the Clausewise core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the Clausewise core library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
