//! Table extraction and rendering.
//!
//! Detection is a collaborator capability ([`TableDetector`]); this
//! module owns what happens after detection: rendering rows of cells
//! to a pipe-delimited textual form, discarding empty tables, and
//! numbering tables per page.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::{PageTables, TableDetector, TableRows};
use crate::error::Result;
use crate::text::normalize_whitespace;

/// A detector that finds no tables.
///
/// The default when no detection capability is wired in; PDF documents
/// then simply carry no table records, the same degradation as a
/// scanned, image-only table.
#[derive(Debug, Clone, Default)]
pub struct NoopTableDetector;

#[async_trait]
impl TableDetector for NoopTableDetector {
    async fn detect_tables(&self, _path: &Path) -> Result<Vec<PageTables>> {
        Ok(Vec::new())
    }
}

/// One table rendered to text, before clause identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// 1-based page number.
    pub page: u32,
    /// 0-based index among the tables detected on that page.
    ///
    /// Indices count detected tables, so a discarded empty table
    /// still consumes its index.
    pub table_index: u32,
    /// Normalized pipe-delimited text, header row first.
    pub text: String,
}

/// Render one table's rows as lines of cells joined by `" | "`.
///
/// The first row is treated as the header and rendered first; missing
/// cells render as empty strings. Returns an empty string for a table
/// with no rows.
#[must_use]
pub fn render_table(rows: &TableRows) -> String {
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(""))
            .collect();
        lines.push(cells.join(" | "));
    }
    lines.join("\n")
}

/// Whether any cell of the table holds non-whitespace content. A table
/// of entirely absent or blank cells still renders separator pipes, so
/// emptiness cannot be judged from the rendered text alone.
fn has_content(rows: &TableRows) -> bool {
    rows.iter()
        .flatten()
        .any(|cell| cell.as_deref().is_some_and(|s| !s.trim().is_empty()))
}

/// Extracts and renders all tables of a PDF document.
#[derive(Debug, Clone)]
pub struct TableExtractor {
    detector: Arc<dyn TableDetector>,
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor {
    /// Create an extractor with no detection capability wired in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: Arc::new(NoopTableDetector),
        }
    }

    /// Create an extractor with an explicit detector.
    #[must_use]
    pub fn with_detector(detector: Arc<dyn TableDetector>) -> Self {
        Self { detector }
    }

    /// Extract all tables of the document, in page order.
    ///
    /// Tables with zero rows, or without a single non-empty cell, are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the detector cannot read the document.
    pub async fn extract(&self, path: &Path) -> Result<Vec<RenderedTable>> {
        let mut rendered = Vec::new();
        for page_tables in self.detector.detect_tables(path).await? {
            for (index, rows) in page_tables.tables.iter().enumerate() {
                let text = render_table(rows);
                if text.trim().is_empty() || !has_content(rows) {
                    debug!(
                        "Discarding empty table {index} on page {} of {}",
                        page_tables.page,
                        path.display()
                    );
                    continue;
                }
                rendered.push(RenderedTable {
                    page: page_tables.page,
                    table_index: u32::try_from(index).unwrap_or(u32::MAX),
                    text: normalize_whitespace(text.trim()),
                });
            }
        }
        Ok(rendered)
    }
}
