//! PDF text extraction with OCR fallback.
//!
//! For each page the embedded text layer is extracted first; pages
//! whose stripped text is shorter than the configured threshold are
//! rendered to an image and run through OCR, keeping the embedded text
//! whenever rendering or recognition fails. After all pages are
//! collected, running headers and footers are detected across the
//! document, each page is cleaned, and the result is normalized into a
//! single string.
//!
//! The default collaborators shell out to `pdftoppm` and `tesseract`;
//! when either executable is missing the pipeline degrades to the
//! embedded text without failing the document.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use super::{ExtractorConfig, OcrEngine, PageRenderer, PdfTextSource};
use crate::error::{IngestionError, Result};
use crate::text::{
    clean_page_text, detect_repeated_lines, is_page_marker, normalize_whitespace, page_marker,
};

/// Check whether an external program can be spawned at all.
pub async fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--help")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .is_ok()
}

/// Embedded text source backed by the `pdf-extract` crate.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractSource;

#[async_trait]
impl PdfTextSource for PdfExtractSource {
    async fn page_texts(&self, path: &Path) -> Result<Vec<String>> {
        debug!("Extracting embedded text from PDF: {}", path.display());

        let bytes = tokio::fs::read(path).await.map_err(IngestionError::Io)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| IngestionError::text_extraction(format!("PDF extraction failed: {e}")))?;

        Ok(pages)
    }
}

/// Page renderer that shells out to `pdftoppm`.
#[derive(Debug, Clone, Default)]
pub struct PdftoppmRenderer;

impl PdftoppmRenderer {
    /// Whether the `pdftoppm` executable is available.
    pub async fn is_available() -> bool {
        command_available("pdftoppm").await
    }
}

#[async_trait]
impl PageRenderer for PdftoppmRenderer {
    async fn render_page(&self, path: &Path, page: u32, dpi: u32) -> Result<Vec<u8>> {
        let dir = tempfile::tempdir().map_err(IngestionError::Io)?;
        let prefix = dir.path().join("page");

        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string())
            .arg("-singlefile")
            .arg(path)
            .arg(&prefix)
            .output()
            .await
            .map_err(IngestionError::Io)?;

        if !output.status.success() {
            return Err(IngestionError::text_extraction(format!(
                "pdftoppm failed for page {page} of {}: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let image = tokio::fs::read(prefix.with_extension("png"))
            .await
            .map_err(IngestionError::Io)?;
        Ok(image)
    }
}

/// OCR engine that shells out to `tesseract`.
#[derive(Debug, Clone, Default)]
pub struct TesseractOcr;

impl TesseractOcr {
    /// Whether the `tesseract` executable is available.
    pub async fn is_available() -> bool {
        command_available("tesseract").await
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, image: &[u8]) -> Result<String> {
        let mut child = Command::new("tesseract")
            .arg("stdin")
            .arg("stdout")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(IngestionError::Io)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(image).await.map_err(IngestionError::Io)?;
        }

        let output = child.wait_with_output().await.map_err(IngestionError::Io)?;
        if !output.status.success() {
            return Err(IngestionError::text_extraction(format!(
                "tesseract failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Extracts the full text of a PDF document, page by page, with OCR
/// fallback for pages whose embedded text layer is too thin.
///
/// # Examples
///
/// ```rust,no_run
/// use clausewise_ingestion::extract::PdfTextExtractor;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let extractor = PdfTextExtractor::new();
///     let text = extractor.extract("policy.pdf".as_ref()).await?;
///     println!("{} characters", text.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PdfTextExtractor {
    source: Arc<dyn PdfTextSource>,
    renderer: Arc<dyn PageRenderer>,
    ocr: Arc<dyn OcrEngine>,
    config: ExtractorConfig,
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTextExtractor {
    /// Create an extractor with the default collaborators
    /// (`pdf-extract`, `pdftoppm`, `tesseract`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: Arc::new(PdfExtractSource),
            renderer: Arc::new(PdftoppmRenderer),
            ocr: Arc::new(TesseractOcr),
            config: ExtractorConfig::default(),
        }
    }

    /// Create an extractor with explicit collaborators.
    #[must_use]
    pub fn with_components(
        source: Arc<dyn PdfTextSource>,
        renderer: Arc<dyn PageRenderer>,
        ocr: Arc<dyn OcrEngine>,
        config: ExtractorConfig,
    ) -> Self {
        Self {
            source,
            renderer,
            ocr,
            config,
        }
    }

    /// Get the extractor configuration.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the document's full text as a single normalized string.
    ///
    /// # Errors
    ///
    /// Returns an error only if the PDF cannot be opened or parsed at
    /// all. OCR and rendering failures degrade silently to the
    /// embedded text of the affected page.
    pub async fn extract(&self, path: &Path) -> Result<String> {
        let embedded = self.source.page_texts(path).await?;

        let mut tagged_pages = Vec::with_capacity(embedded.len());
        for (index, text) in embedded.iter().enumerate() {
            let page = u32::try_from(index + 1).unwrap_or(u32::MAX);
            let page_text = if text.trim().chars().count() < self.config.ocr_threshold_chars {
                match self.ocr_page(path, page).await {
                    Some(ocr_text) => {
                        debug!("Replaced page {page} of {} with OCR text", path.display());
                        ocr_text
                    }
                    None => text.clone(),
                }
            } else {
                text.clone()
            };
            tagged_pages.push(format!("{}\n{page_text}", page_marker(page)));
        }

        let repeated = detect_repeated_lines(&tagged_pages, self.config.repeated_line_threshold);
        let cleaned: Vec<String> = tagged_pages
            .iter()
            .map(|page| {
                clean_page_text(page, &repeated)
                    .lines()
                    .filter(|line| !is_page_marker(line))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();

        Ok(normalize_whitespace(&cleaned.join("\n\n")))
    }

    /// Render and OCR one page, returning `None` on any failure so the
    /// caller keeps the embedded text.
    async fn ocr_page(&self, path: &Path, page: u32) -> Option<String> {
        let image = match self
            .renderer
            .render_page(path, page, self.config.render_dpi)
            .await
        {
            Ok(image) => image,
            Err(e) => {
                warn!(
                    "Page render failed for page {page} of {}, keeping embedded text: {e}",
                    path.display()
                );
                return None;
            }
        };

        match self.ocr.recognize(&image).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    "OCR failed for page {page} of {}, keeping embedded text: {e}",
                    path.display()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixtureSource {
        pages: Vec<String>,
    }

    #[async_trait]
    impl PdfTextSource for FixtureSource {
        async fn page_texts(&self, _path: &Path) -> Result<Vec<String>> {
            Ok(self.pages.clone())
        }
    }

    #[derive(Debug)]
    struct FixtureRenderer {
        fail: bool,
    }

    #[async_trait]
    impl PageRenderer for FixtureRenderer {
        async fn render_page(&self, _path: &Path, page: u32, _dpi: u32) -> Result<Vec<u8>> {
            if self.fail {
                Err(IngestionError::text_extraction("renderer unavailable"))
            } else {
                Ok(format!("image-of-page-{page}").into_bytes())
            }
        }
    }

    #[derive(Debug)]
    struct FixtureOcr {
        text: String,
    }

    #[async_trait]
    impl OcrEngine for FixtureOcr {
        async fn recognize(&self, _image: &[u8]) -> Result<String> {
            Ok(self.text.clone())
        }
    }

    fn extractor(
        pages: Vec<&str>,
        renderer_fails: bool,
        ocr_text: &str,
    ) -> PdfTextExtractor {
        PdfTextExtractor::with_components(
            Arc::new(FixtureSource {
                pages: pages.into_iter().map(String::from).collect(),
            }),
            Arc::new(FixtureRenderer {
                fail: renderer_fails,
            }),
            Arc::new(FixtureOcr {
                text: ocr_text.to_string(),
            }),
            ExtractorConfig::default(),
        )
    }

    fn long_page(body: &str) -> String {
        format!("{body} with enough embedded characters to stay above the OCR threshold")
    }

    #[tokio::test]
    async fn test_ocr_fallback_on_short_page() {
        let page1 = long_page("Coverage terms for hospitalization");
        let page3 = long_page("Exclusions applicable to maternity");
        let extractor = extractor(
            vec![&page1, "scan", &page3],
            false,
            "Recovered scanned clause text",
        );

        let text = extractor.extract(Path::new("fixture.pdf")).await.unwrap();
        assert!(text.contains("Coverage terms for hospitalization"));
        assert!(text.contains("Recovered scanned clause text"));
        assert!(text.contains("Exclusions applicable to maternity"));
        assert!(!text.contains("-- PAGE"));
    }

    #[tokio::test]
    async fn test_render_failure_keeps_embedded_text() {
        let page2 = long_page("Ordinary page");
        let extractor = extractor(vec!["thin", &page2], true, "never used");

        let text = extractor.extract(Path::new("fixture.pdf")).await.unwrap();
        assert!(text.contains("thin"));
        assert!(!text.contains("never used"));
    }

    #[tokio::test]
    async fn test_repeated_headers_removed() {
        let pages: Vec<String> = (1..=4)
            .map(|n| format!("ACME INSURANCE LTD\n{}", long_page(&format!("Clause body {n}"))))
            .collect();
        let refs: Vec<&str> = pages.iter().map(String::as_str).collect();
        let extractor = extractor(refs, true, "");

        let text = extractor.extract(Path::new("fixture.pdf")).await.unwrap();
        assert!(!text.contains("ACME INSURANCE LTD"));
        assert!(text.contains("Clause body 1"));
        assert!(text.contains("Clause body 4"));
    }

    #[tokio::test]
    async fn test_output_is_normalized() {
        let page = long_page("Spaced   out\tclause");
        let extractor = extractor(vec![&page], true, "");

        let text = extractor.extract(Path::new("fixture.pdf")).await.unwrap();
        assert!(!text.contains('\n'));
        assert!(!text.contains('\t'));
        assert!(!text.contains("  "));
    }
}
