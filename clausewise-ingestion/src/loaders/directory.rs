//! Directory-based document loader.

use async_trait::async_trait;
use clausewise_core::traits::{LoadFailure, LoadOutcome, Loader};
use clausewise_core::{PolicyDocument, Result as CoreResult};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};

use super::{file::FileLoader, utils, LoaderConfig};
use crate::error::{IngestionError, Result};
use crate::extract::{PdfTextExtractor, TableExtractor};

/// Loads policy documents from all supported files in a directory.
///
/// Entries are processed in sorted filename order; files with
/// unsupported extensions are silently skipped. One unreadable or
/// malformed file does not abort the batch: it is logged, recorded in
/// the [`LoadOutcome`], and the remaining files continue loading.
///
/// # Examples
///
/// ```rust,no_run
/// use clausewise_ingestion::loaders::DirectoryLoader;
/// use clausewise_core::traits::Loader;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let loader = DirectoryLoader::new("./policies")?;
///     let outcome = loader.load_with_outcome().await?;
///     println!(
///         "{} loaded, {} failed",
///         outcome.documents.len(),
///         outcome.failures.len()
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    /// Path to the directory to load from.
    path: PathBuf,
    /// Configuration shared with the per-file loaders.
    config: LoaderConfig,
    /// PDF full-text extraction pipeline.
    pdf: PdfTextExtractor,
    /// PDF table extraction pipeline.
    tables: TableExtractor,
}

impl DirectoryLoader {
    /// Create a new directory loader for the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or is not a
    /// directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_components(
            path,
            PdfTextExtractor::new(),
            TableExtractor::new(),
            LoaderConfig::default(),
        )
    }

    /// Create a new directory loader with explicit extraction
    /// components.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or is not a
    /// directory.
    pub fn with_components<P: AsRef<Path>>(
        path: P,
        pdf: PdfTextExtractor,
        tables: TableExtractor,
        config: LoaderConfig,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(IngestionError::directory_not_found(
                path.display().to_string(),
            ));
        }

        if !path.is_dir() {
            return Err(IngestionError::configuration(format!(
                "Path is not a directory: {}",
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

    /// Get the directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the loader configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Find the supported files in the directory, sorted by filename.
    async fn find_supported_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut entries = fs::read_dir(&self.path).await.map_err(IngestionError::Io)?;

        while let Some(entry) = entries.next_entry().await.map_err(IngestionError::Io)? {
            let path = entry.path();
            let metadata = match fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Failed to read metadata for {}: {e}", path.display());
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }
            if crate::readers::detect_kind(&path).is_none() {
                debug!("Skipping unsupported file: {}", path.display());
                continue;
            }
            files.push(path);
        }

        files.sort_by_key(|path| utils::source_name(path));
        Ok(files)
    }

    /// Load every supported file, reporting per-file failures instead
    /// of aborting the batch.
    ///
    /// Documents come back in sorted filename order regardless of how
    /// the per-file loads interleave.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory itself cannot be read, or if
    /// a document fails while `continue_on_error` is disabled.
    pub async fn load_with_outcome(&self) -> CoreResult<LoadOutcome> {
        info!("Loading documents from directory: {}", self.path.display());

        let files = self.find_supported_files().await.map_err(|e| {
            error!("Failed to scan directory {}: {e}", self.path.display());
            e
        })?;

        if files.is_empty() {
            warn!("No supported files in directory: {}", self.path.display());
            return Ok(LoadOutcome::default());
        }

        let loads = files.into_iter().map(|path| {
            let pdf = self.pdf.clone();
            let tables = self.tables.clone();
            let config = self.config.clone();
            async move {
                let source = utils::source_name(&path);
                let result = match FileLoader::with_components(&path, pdf, tables, config) {
                    Ok(loader) => loader.load_documents().await,
                    Err(e) => Err(e),
                };
                (source, result)
            }
        });

        let mut outcome = LoadOutcome::default();
        for (source, result) in join_all(loads).await {
            match result {
                Ok(documents) => outcome.documents.extend(documents),
                Err(e) => {
                    error!("Failed to load {source}: {e}");
                    if !self.config.continue_on_error {
                        return Err(e.into());
                    }
                    outcome.failures.push(LoadFailure {
                        source,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Loaded {} documents from {} ({} failed)",
            outcome.documents.len(),
            self.path.display(),
            outcome.failures.len()
        );
        Ok(outcome)
    }
}

#[async_trait]
impl Loader for DirectoryLoader {
    async fn load(&self) -> CoreResult<Vec<PolicyDocument>> {
        Ok(self.load_with_outcome().await?.documents)
    }

    fn name(&self) -> &'static str {
        "DirectoryLoader"
    }

    async fn health_check(&self) -> CoreResult<()> {
        if !self.path.is_dir() {
            return Err(
                IngestionError::directory_not_found(self.path.display().to_string()).into(),
            );
        }

        let _ = fs::read_dir(&self.path).await.map_err(IngestionError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_directory_rejected() {
        let err = DirectoryLoader::new("/nonexistent/policies").unwrap_err();
        assert!(matches!(err, IngestionError::DirectoryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_directory_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DirectoryLoader::new(dir.path()).unwrap();
        let outcome = loader.load_with_outcome().await.unwrap();
        assert!(outcome.documents.is_empty());
        assert!(outcome.is_complete());
    }

    #[tokio::test]
    async fn test_supported_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.eml", "a.eml", "ignored.xyz", "c.eml"] {
            tokio::fs::write(dir.path().join(name), "Subject: x\r\n\r\nbody")
                .await
                .unwrap();
        }

        let loader = DirectoryLoader::new(dir.path()).unwrap();
        let files = loader.find_supported_files().await.unwrap();
        let names: Vec<String> = files.iter().map(|p| utils::source_name(p)).collect();
        assert_eq!(names, vec!["a.eml", "b.eml", "c.eml"]);
    }
}
