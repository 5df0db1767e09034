//! Data types for the Clausewise pipeline.
//!
//! Document records are created once per source file by the ingestion
//! loaders and are immutable thereafter; chunking and indexing consume
//! them downstream through the [`RetrievedChunk`] boundary record.

mod chunk;
mod document;

pub use chunk::RetrievedChunk;
pub use document::{DocumentKind, PolicyDocument, TableRecord};
