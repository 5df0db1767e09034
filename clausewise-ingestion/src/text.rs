//! Text cleaning primitives.
//!
//! Pure functions used by every reader: whitespace normalization,
//! header/footer detection across pages, and per-page cleanup. None of
//! them hold state; the repeated-line set is recomputed per document
//! and never persisted.

use std::collections::{HashMap, HashSet};

/// Default number of pages a line must appear on before it is treated
/// as a running header or footer.
pub const DEFAULT_REPEATED_LINE_THRESHOLD: usize = 3;

/// Collapse all runs of whitespace to single spaces and trim.
///
/// Idempotent: normalizing an already-normalized string returns it
/// unchanged. The output contains no tabs, newlines, or double spaces.
///
/// # Examples
///
/// ```rust
/// use clausewise_ingestion::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a\t b\n\nc  "), "a b c");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Find lines that recur across many pages of one document.
///
/// Each page contributes the *set* of its distinct non-empty stripped
/// lines, so a line repeated within a single page counts once. Lines
/// whose page-count reaches `threshold` are returned; with fewer pages
/// than the threshold nothing can qualify.
#[must_use]
pub fn detect_repeated_lines(pages: &[String], threshold: usize) -> HashSet<String> {
    let mut page_counts: HashMap<&str, usize> = HashMap::new();
    for page in pages {
        let distinct: HashSet<&str> = page
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        for line in distinct {
            *page_counts.entry(line).or_insert(0) += 1;
        }
    }
    page_counts
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|(line, _)| line.to_string())
        .collect()
}

/// Strip blank lines and detected repeated lines from one page.
///
/// Remaining lines are stripped and rejoined with `\n` in their
/// original order. The output never contains a blank line or a line
/// present (after stripping) in `repeated`.
#[must_use]
pub fn clean_page_text(text: &str, repeated: &HashSet<String>) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !repeated.contains(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The boundary marker tagged onto each page before repeated-line
/// detection runs across the document.
#[must_use]
pub fn page_marker(page: u32) -> String {
    format!("-- PAGE {page} --")
}

/// Check whether a stripped line is a page-boundary marker.
///
/// Markers are unique per page so repeated-line detection never
/// removes them; they are stripped explicitly during final assembly
/// so no boundary artifacts survive into the normalized text.
#[must_use]
pub fn is_page_marker(line: &str) -> bool {
    let line = line.trim();
    line.len() > "-- PAGE  --".len() && line.starts_with("-- PAGE ") && line.ends_with(" --")
}
