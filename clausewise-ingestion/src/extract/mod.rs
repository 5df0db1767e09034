//! PDF extraction: collaborator seams and configuration.
//!
//! The extractors in this module consume four capabilities, each
//! behind a trait so deployments can swap implementations and tests
//! can inject fixtures:
//!
//! - [`PdfTextSource`]: per-page embedded text for a PDF
//! - [`PageRenderer`]: one page rendered to an image
//! - [`OcrEngine`]: recognized text for a rendered image
//! - [`TableDetector`]: tables as rows of cells, per page
//!
//! Default implementations live in [`pdf`] and [`tables`].

pub mod pdf;
pub mod tables;

pub use pdf::{PdfExtractSource, PdfTextExtractor, PdftoppmRenderer, TesseractOcr};
pub use tables::{NoopTableDetector, RenderedTable, TableExtractor};

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;

/// Rows of one detected table; cells may be missing.
pub type TableRows = Vec<Vec<Option<String>>>;

/// All tables detected on one PDF page.
#[derive(Debug, Clone, Default)]
pub struct PageTables {
    /// 1-based page number.
    pub page: u32,
    /// Detected tables in page order. May be empty.
    pub tables: Vec<TableRows>,
}

/// Provides the embedded text layer of a PDF, one string per page.
#[async_trait]
pub trait PdfTextSource: Send + Sync + std::fmt::Debug {
    /// Extract the embedded text of every page, in page order.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF cannot be opened or parsed at all;
    /// this is fatal for the document.
    async fn page_texts(&self, path: &Path) -> Result<Vec<String>>;
}

/// Renders a single PDF page to an image.
#[async_trait]
pub trait PageRenderer: Send + Sync + std::fmt::Debug {
    /// Render the given 1-based page to PNG bytes at the given dpi.
    async fn render_page(&self, path: &Path, page: u32, dpi: u32) -> Result<Vec<u8>>;
}

/// Converts a rendered page image to text.
///
/// Failures never propagate past the extraction boundary; the caller
/// falls back to the embedded text.
#[async_trait]
pub trait OcrEngine: Send + Sync + std::fmt::Debug {
    /// Recognize text in a PNG image.
    async fn recognize(&self, image: &[u8]) -> Result<String>;
}

/// Detects tables on the pages of a PDF.
///
/// There is no OCR fallback for tables: image-only scanned tables
/// simply yield no table records.
#[async_trait]
pub trait TableDetector: Send + Sync + std::fmt::Debug {
    /// Detect tables across the whole document, grouped by page.
    async fn detect_tables(&self, path: &Path) -> Result<Vec<PageTables>>;
}

/// Configuration for PDF extraction.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Minimum stripped character count for a page's embedded text;
    /// below this, OCR is attempted.
    pub ocr_threshold_chars: usize,

    /// Number of pages a line must recur on to count as header/footer.
    pub repeated_line_threshold: usize,

    /// Resolution used when rendering pages for OCR.
    pub render_dpi: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            ocr_threshold_chars: 50,
            repeated_line_threshold: crate::text::DEFAULT_REPEATED_LINE_THRESHOLD,
            render_dpi: 200,
        }
    }
}

impl ExtractorConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the OCR trigger threshold in characters.
    #[must_use]
    pub fn with_ocr_threshold_chars(mut self, chars: usize) -> Self {
        self.ocr_threshold_chars = chars;
        self
    }

    /// Set the repeated-line page threshold.
    #[must_use]
    pub fn with_repeated_line_threshold(mut self, pages: usize) -> Self {
        self.repeated_line_threshold = pages;
        self
    }

    /// Set the rendering resolution for OCR.
    #[must_use]
    pub fn with_render_dpi(mut self, dpi: u32) -> Self {
        self.render_dpi = dpi;
        self
    }
}
