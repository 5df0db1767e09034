//! Per-format document readers.

pub mod docx;
pub mod email;

use clausewise_core::DocumentKind;
use std::path::Path;

/// Determine the document kind of a path from its extension,
/// case-insensitively. Returns `None` for unsupported files.
#[must_use]
pub fn detect_kind(path: &Path) -> Option<DocumentKind> {
    let extension = path.extension()?.to_str()?;
    DocumentKind::from_extension(extension)
}
