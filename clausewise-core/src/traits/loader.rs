//! Document loading traits.
//!
//! This module defines the interface between document sources (files,
//! directories) and the rest of the pipeline, along with the outcome
//! type used to report partial success for batch loads.

use async_trait::async_trait;

use crate::{PolicyDocument, Result};

/// Loads policy documents from a data source.
///
/// Implementations handle the specifics of each source (a single file,
/// a directory of files) while providing a consistent API.
///
/// # Examples
///
/// ```rust,no_run
/// use clausewise_core::traits::Loader;
/// use clausewise_core::{DocumentKind, PolicyDocument, Result};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct FixtureLoader;
///
/// #[async_trait]
/// impl Loader for FixtureLoader {
///     async fn load(&self) -> Result<Vec<PolicyDocument>> {
///         Ok(vec![PolicyDocument::new("a.pdf", DocumentKind::Pdf, "text")])
///     }
/// }
/// ```
#[async_trait]
pub trait Loader: Send + Sync + std::fmt::Debug {
    /// Load all documents from the data source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source itself cannot be accessed.
    /// Failures confined to a single document within a batch are
    /// reported through [`LoadOutcome`] instead, where supported.
    async fn load(&self) -> Result<Vec<PolicyDocument>>;

    /// Get a human-readable name for this loader.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Check if the loader can access its data source.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// A single document that failed to load within a batch.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    /// Filename of the document that failed.
    pub source: String,

    /// Description of what went wrong.
    pub reason: String,
}

/// The result of a batch load: documents that loaded plus per-file
/// failures, so callers can report "N loaded, M skipped" and decide
/// whether partial results are acceptable.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Documents that loaded successfully, in source order.
    pub documents: Vec<PolicyDocument>,

    /// Documents that failed, with reasons.
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    /// Total number of documents attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.documents.len() + self.failures.len()
    }

    /// Whether every attempted document loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fraction of attempted documents that loaded, as a percentage.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                (self.documents.len() as f64 / total as f64) * 100.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentKind;

    #[test]
    fn test_load_outcome() {
        let mut outcome = LoadOutcome::default();
        assert!(outcome.is_complete());
        assert_eq!(outcome.success_rate(), 0.0);

        outcome
            .documents
            .push(PolicyDocument::new("a.pdf", DocumentKind::Pdf, "text"));
        outcome.failures.push(LoadFailure {
            source: "b.pdf".into(),
            reason: "corrupt xref table".into(),
        });

        assert_eq!(outcome.total(), 2);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.success_rate(), 50.0);
    }
}
