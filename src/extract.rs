//! Citation patterns and the free-text scanner built on them.
//!
//! A citation is an optional ordinal prefix, a capitalized book token and one
//! or more comma separated chapter/verse markers:
//!
//! ```text
//! I read 1 John 4:8, 4:16b and Gen 1:1-3 today
//!        |---------------|     |-------|
//! ```
//!
//! The pattern over-matches on purpose ("Chapter 5" is a citation here);
//! anything the canon can't resolve is dropped later.

use once_cell::sync::Lazy;
use regex::Regex;

const PREFIX: &str = r"(?:(?:I|II|III|IV|1|2|3|4|First|Second|Third|Fourth|Song of|Acts of the)\s*)?";
const BOOK: &str = r"[A-Z][a-z]+";
const DASH: &str = r"(?:-|–|—|&ndash;|&mdash;)";

fn marker_pattern() -> String {
    format!(
        r"[0-9]+(?::[0-9]+[a-z]?)?(?:{dash}[0-9]+(?::[0-9]+)?[a-z]?)?",
        dash = DASH
    )
}

/// Book token, with its optional ordinal prefix.
pub(crate) static BOOK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b{}{}", PREFIX, BOOK)).unwrap());

/// A single chapter/verse marker such as `3`, `3:16a` or `3:16-4:2`.
pub(crate) static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&marker_pattern()).unwrap());

static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    let marker = marker_pattern();
    Regex::new(&format!(
        r"\b{prefix}{book}\s?{marker}(?:,\s*{marker})*",
        prefix = PREFIX,
        book = BOOK,
        marker = marker
    ))
    .unwrap()
});

/// Every citation-looking substring of `text`, in order of appearance.
/// Duplicates are kept.
pub fn extract(text: &str) -> Vec<String> {
    let found: Vec<String> = CITATION_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    tracing::trace!(count = found.len(), "extracted citation candidates");
    found
}
