//! Document ingestion and normalization for the Clausewise pipeline.
//!
//! This crate turns a directory of insurance policy documents into
//! normalized [`PolicyDocument`](clausewise_core::PolicyDocument)
//! records ready for external chunking and indexing:
//!
//! - **Loaders**: file and directory loaders dispatching by extension
//! - **Extraction**: per-page PDF text with OCR fallback, table
//!   detection and rendering, DOCX and email readers
//! - **Cleaning**: whitespace normalization and header/footer removal
//! - **Clause IDs**: deterministic content hashes for idempotent
//!   downstream storage
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clausewise_ingestion::prelude::*;
//! use clausewise_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let loader = DirectoryLoader::new("./policies")?;
//!     let outcome = loader.load_with_outcome().await?;
//!
//!     for doc in &outcome.documents {
//!         println!("{}: {} tables", doc.source, doc.tables.len());
//!     }
//!     for failure in &outcome.failures {
//!         eprintln!("skipped {}: {}", failure.source, failure.reason);
//!     }
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clause;
pub mod error;
pub mod extract;
pub mod loaders;
pub mod readers;
pub mod text;

// Re-export the primary entry points at crate root
pub use loaders::{DirectoryLoader, FileLoader, LoaderConfig};

/// Re-export commonly used types and traits.
pub mod prelude {
    // Re-export our own error types
    pub use crate::error::{IngestionError, Result as IngestionResult};

    // Re-export loaders
    pub use crate::loaders::{DirectoryLoader, FileLoader, LoaderConfig};

    // Re-export extraction components and seams
    pub use crate::extract::{
        ExtractorConfig, NoopTableDetector, OcrEngine, PageRenderer, PageTables, PdfExtractSource,
        PdfTextExtractor, PdfTextSource, PdftoppmRenderer, TableDetector, TableExtractor,
        TableRows, TesseractOcr,
    };

    // Re-export text cleaning and clause hashing
    pub use crate::clause::clause_id;
    pub use crate::text::{clean_page_text, detect_repeated_lines, normalize_whitespace};
}
