use once_cell::sync::Lazy;
use regex::Regex;

use crate::canon::BookCanon;
use crate::error::RefError;
use crate::models::Reference;

// Stray annotations like "Ch" or "Vv"; deliberately not a general letter filter.
static LETTER_PAIR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn clean(marker: &str) -> String {
    let marker = LETTER_PAIR_RE.replace_all(marker, "");
    WHITESPACE_RE
        .replace_all(&marker, "")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace('–', "-")
        .replace('—', "-")
        .replace('.', ":")
}

/// Leading digits of one component; trailing sub-verse letters are dropped.
fn number(component: &str, marker: &str) -> Result<u32, RefError> {
    let digits: String = component.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RefError::BadlyFormed(marker.to_string())),
    }
}

fn numbers(part: Option<&str>, marker: &str) -> Result<Vec<u32>, RefError> {
    match part {
        Some(part) => part.split(':').map(|c| number(c, marker)).collect(),
        None => Ok(Vec::new()),
    }
}

type Bounds = (Option<u32>, Option<u32>, Option<u32>, Option<u32>);

/// Maps the start/end number groups to (start chapter, start verse,
/// end chapter, end verse).
fn bounds(start: &[u32], end: &[u32]) -> Option<Bounds> {
    let bounds = match (start, end) {
        // 1
        (&[ch], &[]) => (Some(ch), None, None, None),
        // 1-2
        (&[ch], &[end_ch]) => (Some(ch), None, Some(end_ch), None),
        // 1-2:3
        (&[ch], &[end_ch, end_v]) => (Some(ch), Some(1), Some(end_ch), Some(end_v)),
        // 1:2
        (&[ch, v], &[]) => (Some(ch), Some(v), None, None),
        // 1:2-3
        (&[ch, v], &[end_v]) => (Some(ch), Some(v), Some(ch), Some(end_v)),
        // 1:2-3:4
        (&[ch, v], &[end_ch, end_v]) => (Some(ch), Some(v), Some(end_ch), Some(end_v)),
        _ => return None,
    };
    Some(bounds)
}

/// Parses one chapter/verse marker (`"3"`, `"3:16-18"`, `"1-2:3"` ...) for
/// `book`.
///
/// `book` is resolved through `canon` first; for one-chapter books a verse
/// is read as the chapter number (`Jude 1:5` is `Jude 5`).
pub fn parse<C: BookCanon>(
    canon: &C,
    marker: &str,
    book: Option<&str>,
) -> Result<Reference, RefError> {
    let cleaned = clean(marker);
    let mut parts = cleaned.splitn(2, '-');
    let start = numbers(parts.next(), marker)?;
    let end = numbers(parts.next(), marker)?;

    let (start_chapter, start_verse, end_chapter, end_verse) =
        bounds(&start, &end).ok_or_else(|| RefError::BadlyFormed(marker.to_string()))?;

    let book = match book {
        Some(raw) => Some(canon.normalize_book_title(raw)?),
        None => None,
    };
    let chapter_count = book.as_ref().and_then(|b| canon.chapter_count(b));

    Ok(Reference::new(
        book,
        chapter_count,
        start_chapter,
        start_verse,
        end_chapter,
        end_verse,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::Canon;

    fn genesis(marker: &str) -> Reference {
        parse(&Canon, marker, Some("Gen")).unwrap()
    }

    fn fields(r: &Reference) -> Bounds {
        (r.start_chapter(), r.start_verse(), r.end_chapter(), r.end_verse())
    }

    #[test]
    fn test_six_shapes() {
        assert_eq!(fields(&genesis("1")), (Some(1), None, None, None));
        assert_eq!(fields(&genesis("1-2")), (Some(1), None, Some(2), None));
        assert_eq!(fields(&genesis("1-2:3")), (Some(1), Some(1), Some(2), Some(3)));
        assert_eq!(fields(&genesis("1:2")), (Some(1), Some(2), None, None));
        assert_eq!(fields(&genesis("1:2-3")), (Some(1), Some(2), Some(1), Some(3)));
        assert_eq!(fields(&genesis("1:2-3:4")), (Some(1), Some(2), Some(3), Some(4)));
    }

    #[test]
    fn test_predicates_after_parse() {
        let chapter = genesis("1");
        assert!(chapter.is_chapter_only());
        assert_eq!(chapter.start_verse(), None);
        assert_eq!(chapter.end_verse(), None);

        let chapters = genesis("1-2");
        assert!(chapters.is_multiple_chapter());
        assert_eq!(chapters.start_verse(), None);
        assert_eq!(chapters.end_verse(), None);

        assert!(genesis("1:2").is_single_verse());
        assert!(genesis("1:2-3").is_single_chapter());
    }

    #[test]
    fn test_resolves_book() {
        assert_eq!(genesis("1").book(), Some("Genesis"));
        assert_eq!(parse(&Canon, "1", None).unwrap().book(), None);
        assert_eq!(
            parse(&Canon, "1", Some("Unknownbookxx")),
            Err(RefError::UnknownBook("Unknownbookxx".to_string()))
        );
    }

    #[test]
    fn test_one_chapter_books() {
        let chapter = parse(&Canon, "5", Some("Jude")).unwrap();
        assert_eq!(chapter.start_chapter(), Some(5));
        assert_eq!(chapter.start_verse(), None);

        let verse = parse(&Canon, "1:5", Some("Jude")).unwrap();
        assert_eq!(verse.start_chapter(), Some(5));
        assert_eq!(verse.start_verse(), None);
        assert_eq!(verse.end_chapter(), None);

        // Without a book there is no chapter count to consult.
        let bare = parse(&Canon, "1:5", None).unwrap();
        assert_eq!(bare.start_verse(), Some(5));
    }

    #[test]
    fn test_normalizes_marker_text() {
        assert_eq!(fields(&genesis(" 1 : 2 – 3 ")), (Some(1), Some(2), Some(1), Some(3)));
        assert_eq!(fields(&genesis("1:2&ndash;3")), (Some(1), Some(2), Some(1), Some(3)));
        assert_eq!(fields(&genesis("1:2—3:4")), (Some(1), Some(2), Some(3), Some(4)));
        assert_eq!(fields(&genesis("1.2")), (Some(1), Some(2), None, None));
        assert_eq!(fields(&genesis("Ch1:2")), (Some(1), Some(2), None, None));
        assert_eq!(fields(&genesis("1:2a-3b")), (Some(1), Some(2), Some(1), Some(3)));
    }

    #[test]
    fn test_badly_formed() {
        for marker in &["abc", "", "1:", "-2", "1-", "1:2:3", "1-2:3:4", "0", "1:0", "99999999999"] {
            assert_eq!(
                parse(&Canon, marker, Some("Gen")),
                Err(RefError::BadlyFormed(marker.to_string())),
                "marker {:?}",
                marker
            );
        }
    }

    #[test]
    fn test_shape_key_round_trip() {
        let present = |v: Option<u32>| v.is_some() as u32;
        for (marker, key) in &[("1", 10), ("1-2", 11), ("1:2", 20), ("1:2-3:4", 22)] {
            let r = genesis(marker);
            let derived = (present(r.start_chapter()) + present(r.start_verse())) * 10
                + present(r.end_chapter())
                + present(r.end_verse());
            assert_eq!(derived, *key, "marker {:?}", marker);
        }
    }
}
