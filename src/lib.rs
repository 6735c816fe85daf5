//! Scripture citation extraction.
//!
//! Free text goes through three stages:
//!
//! 1. [`grep_references`] finds citation-looking substrings
//!    (`"Gen 1:1, 2:3-4"`),
//! 2. [`normalize_and_split_references`] resolves the book name and splits
//!    grouped markers (`["Genesis 1:1", "Genesis 2:3-4"]`),
//! 3. [`parse_refs`] / [`parse_cv`] turn each marker into a [`Reference`].
//!
//! ```
//! let refs = bible_citations_rs::get_unique_refs("See Gen 1:1, 2:3-4 and Jude 5");
//! assert_eq!(refs, vec!["Genesis 1:1", "Genesis 2:3-4", "Jude 5"]);
//!
//! let parsed = bible_citations_rs::parse_refs(&refs);
//! assert_eq!(parsed[2].start_chapter(), Some(5));
//! ```
//!
//! The free functions use the built-in English [`Canon`]; use [`Citations`]
//! to plug in another [`BookCanon`].

pub mod canon;
pub mod error;
pub mod extract;
pub mod marker;
pub mod models;
pub mod normalize;

use once_cell::sync::Lazy;

pub use crate::canon::{BookCanon, Canon};
pub use crate::error::RefError;
pub use crate::models::{Reference, Shape};

/// The citation pipeline bound to a book canon.
#[derive(Debug, Default, Clone)]
pub struct Citations<C = Canon> {
    canon: C,
}

impl<C: BookCanon> Citations<C> {
    pub fn new(canon: C) -> Self {
        Citations { canon }
    }

    pub fn canon(&self) -> &C {
        &self.canon
    }

    /// Raw citation substrings of `text`, duplicates included.
    pub fn grep_references(&self, text: &str) -> Vec<String> {
        extract::extract(text)
    }

    /// Canonical `"<book> <marker>"` strings, one per marker.
    pub fn normalize_and_split_references<I, S>(&self, refs: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        normalize::normalize_and_split(&self.canon, refs)
    }

    /// Canonical reference strings found in `text`, each listed once.
    pub fn get_unique_refs(&self, text: &str) -> Vec<String> {
        normalize::unique_refs(&self.canon, text)
    }

    /// Parses a single marker. Unlike the other entry points this reports
    /// failures to the caller.
    pub fn parse_cv(&self, marker: &str, book: Option<&str>) -> Result<Reference, RefError> {
        marker::parse(&self.canon, marker, book)
    }

    fn parse_entry(&self, entry: &str) -> Result<Reference, RefError> {
        let (book, marker) = normalize::split_book(&self.canon, entry)?;
        self.parse_cv(marker.trim(), Some(&book))
    }

    /// Structured references for raw citations. Entries that fail to resolve
    /// or parse are left out.
    pub fn parse_refs<I, S>(&self, refs: I) -> Vec<Reference>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = normalize::dedup(self.normalize_and_split_references(refs));
        canonical
            .iter()
            .map(|entry| (entry, self.parse_entry(entry)))
            .filter_map(|(entry, parsed)| match parsed {
                Ok(reference) => Some(reference),
                Err(e) => {
                    tracing::debug!(entry = entry.as_str(), error = %e, "skipping reference");
                    None
                }
            })
            .collect()
    }
}

static DEFAULT: Lazy<Citations> = Lazy::new(Citations::default);

/// See [`Citations::grep_references`].
pub fn grep_references(text: &str) -> Vec<String> {
    DEFAULT.grep_references(text)
}

/// See [`Citations::normalize_and_split_references`].
pub fn normalize_and_split_references<I, S>(refs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT.normalize_and_split_references(refs)
}

/// See [`Citations::get_unique_refs`].
pub fn get_unique_refs(text: &str) -> Vec<String> {
    DEFAULT.get_unique_refs(text)
}

/// See [`Citations::parse_cv`].
pub fn parse_cv(marker: &str, book: Option<&str>) -> Result<Reference, RefError> {
    DEFAULT.parse_cv(marker, book)
}

/// See [`Citations::parse_refs`].
pub fn parse_refs<I, S>(refs: I) -> Vec<Reference>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT.parse_refs(refs)
}
