//! DOCX paragraph extraction.

use std::path::Path;
use tracing::debug;

use crate::error::{IngestionError, Result};
use crate::text::normalize_whitespace;

/// Extract the text of a Word document.
///
/// Non-empty paragraphs are joined with newlines and the result is
/// whitespace-normalized.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid DOCX
/// container.
pub async fn read_docx_text(path: &Path) -> Result<String> {
    debug!("Extracting text from Word document: {}", path.display());

    let bytes = tokio::fs::read(path).await.map_err(IngestionError::Io)?;
    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| IngestionError::document_parsing(format!("DOCX parsing failed: {e}")))?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let mut text = String::new();
            for para_child in para.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(text_elem) = run_child {
                            text.push_str(&text_elem.text);
                        }
                    }
                }
            }
            let text = text.trim();
            if !text.is_empty() {
                paragraphs.push(text.to_string());
            }
        }
    }

    Ok(normalize_whitespace(&paragraphs.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_docx_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        tokio::fs::write(&path, b"not a zip archive").await.unwrap();

        let err = read_docx_text(&path).await.unwrap_err();
        assert!(matches!(err, IngestionError::DocumentParsing { .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = read_docx_text(Path::new("/nonexistent/file.docx"))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestionError::Io(_)));
    }
}
