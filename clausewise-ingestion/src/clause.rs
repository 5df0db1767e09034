//! Deterministic clause identification.
//!
//! Clause IDs are the external contract downstream stores key on:
//! re-ingesting the same file must produce the same IDs so table and
//! clause content can be upserted rather than duplicated.

use sha2::{Digest, Sha256};

/// Number of leading characters of the text that participate in the
/// hash. Two texts sharing a 100-character prefix (for example, tables
/// with identical long headers) deliberately collide to the same ID.
pub const CLAUSE_SNIPPET_CHARS: usize = 100;

/// Compute the deterministic clause ID for a piece of content.
///
/// The ID is the SHA-256 hex digest of the UTF-8 encoding of
/// `"{source}|{page}|{snippet}"`, where `snippet` is the first
/// [`CLAUSE_SNIPPET_CHARS`] characters of `text`. An absent page
/// renders as an empty segment.
///
/// # Examples
///
/// ```rust
/// use clausewise_ingestion::clause::clause_id;
///
/// let a = clause_id("a.pdf", Some(1), "Hello world");
/// let b = clause_id("a.pdf", Some(1), "Hello world");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
#[must_use]
pub fn clause_id(source: &str, page: Option<u32>, text: &str) -> String {
    let snippet: String = text.chars().take(CLAUSE_SNIPPET_CHARS).collect();
    let page_part = page.map(|p| p.to_string()).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(format!("{source}|{page_part}|{snippet}").as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(
            clause_id("a.pdf", Some(1), "Hello world"),
            clause_id("a.pdf", Some(1), "Hello world")
        );
    }

    #[test]
    fn test_input_sensitivity() {
        let base = clause_id("a.pdf", Some(1), "Hello world");
        assert_ne!(base, clause_id("b.pdf", Some(1), "Hello world"));
        assert_ne!(base, clause_id("a.pdf", Some(2), "Hello world"));
        assert_ne!(base, clause_id("a.pdf", Some(1), "Hello there"));
        assert_ne!(base, clause_id("a.pdf", None, "Hello world"));
    }

    #[test]
    fn test_prefix_collision_is_deliberate() {
        let prefix = "x".repeat(CLAUSE_SNIPPET_CHARS);
        let a = clause_id("a.pdf", Some(1), &format!("{prefix}tail one"));
        let b = clause_id("a.pdf", Some(1), &format!("{prefix}tail two"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // 100 two-byte characters followed by divergent tails must
        // still collide; a divergence inside the first 100 must not.
        let prefix = "é".repeat(CLAUSE_SNIPPET_CHARS);
        let a = clause_id("a.pdf", Some(1), &format!("{prefix}one"));
        let b = clause_id("a.pdf", Some(1), &format!("{prefix}two"));
        assert_eq!(a, b);

        let short = "é".repeat(CLAUSE_SNIPPET_CHARS - 1);
        let c = clause_id("a.pdf", Some(1), &format!("{short}X"));
        let d = clause_id("a.pdf", Some(1), &format!("{short}Y"));
        assert_ne!(c, d);
    }

    #[test]
    fn test_hex_output() {
        let id = clause_id("a.pdf", Some(1), "Hello world");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
