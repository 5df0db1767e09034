//! Single-file document loader.

use async_trait::async_trait;
use clausewise_core::traits::Loader;
use clausewise_core::{DocumentKind, PolicyDocument, Result as CoreResult, TableRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{utils, LoaderConfig};
use crate::clause::clause_id;
use crate::error::{IngestionError, Result};
use crate::extract::{PdfTextExtractor, TableExtractor, TesseractOcr};
use crate::readers::{self, docx, email};

/// Loads one policy document from a file.
///
/// Dispatches by case-insensitive extension: PDF files get per-page
/// text extraction (with OCR fallback) plus table extraction; DOCX and
/// email files get their respective readers. Unsupported extensions
/// load to nothing rather than an error, so directory scans can pass
/// every entry through.
///
/// # Examples
///
/// ```rust,no_run
/// use clausewise_ingestion::loaders::FileLoader;
/// use clausewise_core::traits::Loader;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let loader = FileLoader::new("policy.pdf")?;
///     let documents = loader.load().await?;
///     for doc in documents {
///         println!("{}: {} chars, {} tables", doc.source, doc.full_text.len(), doc.tables.len());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileLoader {
    /// Path to the file to load.
    path: PathBuf,
    /// Configuration for the loader.
    config: LoaderConfig,
    /// PDF full-text extraction pipeline.
    pdf: PdfTextExtractor,
    /// PDF table extraction pipeline.
    tables: TableExtractor,
}

impl FileLoader {
    /// Create a new file loader for the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or is not a file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_components(
            path,
            PdfTextExtractor::new(),
            TableExtractor::new(),
            LoaderConfig::default(),
        )
    }

    /// Create a new file loader with explicit extraction components.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or is not a file.
    pub fn with_components<P: AsRef<Path>>(
        path: P,
        pdf: PdfTextExtractor,
        tables: TableExtractor,
        config: LoaderConfig,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(IngestionError::file_not_found(path.display().to_string()));
        }

        if !path.is_file() {
            return Err(IngestionError::configuration(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(Self {
            path,
            config,
            pdf,
            tables,
        })
    }

    /// Get the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the loader configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the document, or nothing for unsupported extensions.
    pub(crate) async fn load_documents(&self) -> Result<Vec<PolicyDocument>> {
        let Some(kind) = readers::detect_kind(&self.path) else {
            debug!("Skipping unsupported file: {}", self.path.display());
            return Ok(vec![]);
        };

        if let Some(max_size) = self.config.max_file_size {
            let size = utils::file_size(&self.path).await?;
            if size > max_size {
                warn!(
                    "Skipping file {} (size {} > max {})",
                    self.path.display(),
                    size,
                    max_size
                );
                return Ok(vec![]);
            }
        }

        let source = utils::source_name(&self.path);

        let (full_text, tables) = match kind {
            DocumentKind::Pdf => {
                let full_text = self.pdf.extract(&self.path).await?;
                let rendered = self.tables.extract(&self.path).await?;
                let tables = rendered
                    .into_iter()
                    .map(|t| TableRecord {
                        clause_id: clause_id(&source, Some(t.page), &t.text),
                        page: t.page,
                        table_index: t.table_index,
                        text: t.text,
                    })
                    .collect();
                (full_text, tables)
            }
            DocumentKind::Docx => (docx::read_docx_text(&self.path).await?, Vec::new()),
            DocumentKind::Email => (email::read_email_text(&self.path).await?, Vec::new()),
        };

        let file_size = utils::file_size(&self.path).await.ok();
        let mut document = PolicyDocument::new(source, kind, full_text)
            .with_tables(tables)
            .with_metadata("source", self.path.display().to_string())
            .with_metadata("content_type", utils::content_type(&self.path, kind));
        if let Some(size) = file_size {
            document = document.with_metadata("file_size", size);
        }

        debug!(
            "Loaded {} ({}, {} tables)",
            document.source,
            document.kind,
            document.tables.len()
        );
        Ok(vec![document])
    }
}

#[async_trait]
impl Loader for FileLoader {
    async fn load(&self) -> CoreResult<Vec<PolicyDocument>> {
        info!("Loading file: {}", self.path.display());
        self.load_documents().await.map_err(Into::into)
    }

    fn name(&self) -> &'static str {
        "FileLoader"
    }

    async fn health_check(&self) -> CoreResult<()> {
        if !self.path.is_file() {
            return Err(IngestionError::file_not_found(self.path.display().to_string()).into());
        }

        if readers::detect_kind(&self.path) == Some(DocumentKind::Pdf)
            && !TesseractOcr::is_available().await
        {
            warn!("tesseract is unavailable; scanned PDF pages will keep their embedded text");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_rejected() {
        let err = FileLoader::new("/nonexistent/policy.pdf").unwrap_err();
        assert!(matches!(err, IngestionError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_extension_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.xyz");
        tokio::fs::write(&path, "plain text").await.unwrap();

        let loader = FileLoader::new(&path).unwrap();
        let docs = loader.load().await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_file_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.eml");
        tokio::fs::write(&path, "Subject: x\r\n\r\nbody text here")
            .await
            .unwrap();

        let config = LoaderConfig::new().with_max_file_size(4);
        let loader = FileLoader::with_components(
            &path,
            PdfTextExtractor::new(),
            TableExtractor::new(),
            config,
        )
        .unwrap();
        let docs = loader.load().await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_eml_document_assembled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claim.eml");
        tokio::fs::write(&path, "Subject: x\r\n\r\nSettlement approved.")
            .await
            .unwrap();

        let loader = FileLoader::new(&path).unwrap();
        let docs = loader.load().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "claim.eml");
        assert_eq!(docs[0].kind, DocumentKind::Email);
        assert_eq!(docs[0].full_text, "Settlement approved.");
        assert!(docs[0].tables.is_empty());
        assert_eq!(
            docs[0].get_metadata_string("content_type"),
            Some("message/rfc822".to_string())
        );
    }
}
