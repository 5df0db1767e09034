//! Email body extraction for `.eml` and `.msg` containers.
//!
//! Only the plain-text body is kept. Malformed byte sequences are
//! decoded lossily rather than failing the document; both parsers
//! substitute replacement characters for bytes that do not decode.

use std::path::Path;
use tracing::debug;

use crate::error::{IngestionError, Result};
use crate::text::normalize_whitespace;

/// Extract the normalized plain-text body of an RFC 822 `.eml` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the envelope cannot
/// be parsed at all.
pub async fn read_eml_text(path: &Path) -> Result<String> {
    debug!("Extracting body from email: {}", path.display());

    let bytes = tokio::fs::read(path).await.map_err(IngestionError::Io)?;
    let message = mail_parser::MessageParser::default()
        .parse(&bytes)
        .ok_or_else(|| {
            IngestionError::document_parsing(format!(
                "unparseable email envelope: {}",
                path.display()
            ))
        })?;

    let body = message
        .body_text(0)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    Ok(normalize_whitespace(&body))
}

/// Extract the normalized plain-text body of an Outlook `.msg` file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid
/// compound document.
pub async fn read_msg_text(path: &Path) -> Result<String> {
    debug!("Extracting body from Outlook message: {}", path.display());

    let outlook = msg_parser::Outlook::from_path(path)
        .map_err(|e| IngestionError::document_parsing(format!("MSG parsing failed: {e:?}")))?;

    Ok(normalize_whitespace(&outlook.body))
}

/// Extract the body of an email container, dispatching on extension.
///
/// # Errors
///
/// Propagates the underlying reader error; unsupported extensions are
/// rejected (the loaders never route them here).
pub async fn read_email_text(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "eml" => read_eml_text(path).await,
        "msg" => read_msg_text(path).await,
        other => Err(IngestionError::unsupported_format(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EML: &str = "From: claims@insurer.example\r\n\
        To: insured@example.com\r\n\
        Subject: Claim settlement note\r\n\
        \r\n\
        Your claim   for hospitalization\r\n\
        has been approved.\r\n";

    #[tokio::test]
    async fn test_eml_body_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claim.eml");
        tokio::fs::write(&path, SAMPLE_EML).await.unwrap();

        let body = read_email_text(&path).await.unwrap();
        assert_eq!(body, "Your claim for hospitalization has been approved.");
    }

    #[tokio::test]
    async fn test_eml_with_invalid_utf8_is_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.eml");
        let mut bytes = b"Subject: x\r\n\r\nbody ".to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        bytes.extend_from_slice(b" end");
        tokio::fs::write(&path, bytes).await.unwrap();

        // Must not fail; malformed bytes degrade to replacement chars.
        let body = read_email_text(&path).await.unwrap();
        assert!(body.contains("body"));
        assert!(body.contains("end"));
    }

    #[tokio::test]
    async fn test_unsupported_extension_rejected() {
        let err = read_email_text(Path::new("x.mbox")).await.unwrap_err();
        assert!(matches!(err, IngestionError::UnsupportedFormat { .. }));
    }
}
