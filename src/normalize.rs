use std::collections::HashSet;
use std::hash::Hash;

use crate::canon::BookCanon;
use crate::error::RefError;
use crate::extract::{extract, BOOK_RE, MARKER_RE};

/// Splits a citation into its canonical book title and the text after the
/// book token.
pub(crate) fn split_book<'a, C: BookCanon>(
    canon: &C,
    citation: &'a str,
) -> Result<(String, &'a str), RefError> {
    let found = BOOK_RE
        .find(citation)
        .ok_or_else(|| RefError::UnknownBook(citation.to_string()))?;
    let book = canon.normalize_book_title(found.as_str())?;
    Ok((book, &citation[found.end()..]))
}

/// Canonical `"<book> <marker>"` strings for one raw citation.
fn split_entry<C: BookCanon>(canon: &C, entry: &str) -> Result<Vec<String>, RefError> {
    let (book, rest) = split_book(canon, entry.trim())?;
    Ok(MARKER_RE
        .find_iter(rest)
        .map(|m| format!("{} {}", book, m.as_str()))
        .collect())
}

/// Resolves book names and expands grouped markers, one output per marker.
///
/// `"Gen 1:1, 2:3-4"` becomes `["Genesis 1:1", "Genesis 2:3-4"]`. Entries
/// whose book can't be located or resolved are dropped.
pub fn normalize_and_split<C, I, S>(canon: &C, refs: I) -> Vec<String>
where
    C: BookCanon,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    refs.into_iter()
        .flat_map(|entry| match split_entry(canon, entry.as_ref()) {
            Ok(split) => split,
            Err(e) => {
                tracing::debug!(entry = entry.as_ref(), error = %e, "skipping citation");
                Vec::new()
            }
        })
        .collect()
}

/// Drops repeated values, keeping the first occurrence of each.
pub(crate) fn dedup<T: Clone + Eq + Hash>(values: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// Canonical, de-duplicated reference strings found in `text`.
pub fn unique_refs<C: BookCanon>(canon: &C, text: &str) -> Vec<String> {
    dedup(normalize_and_split(canon, extract(text)))
}
