use std::collections::HashMap;

use bible_citations_rs::{BookCanon, Citations, RefError, Shape};

/// A tiny canon keyed by exact spelling.
struct Table {
    names: HashMap<&'static str, &'static str>,
    chapters: HashMap<&'static str, u32>,
}

impl Table {
    fn new() -> Table {
        let names = vec![
            ("Gen", "Genesis"),
            ("Genesis", "Genesis"),
            ("Ob", "Obadiah"),
            ("Obadiah", "Obadiah"),
        ];
        let chapters = vec![("Genesis", 50), ("Obadiah", 1)];
        Table {
            names: names.into_iter().collect(),
            chapters: chapters.into_iter().collect(),
        }
    }
}

impl BookCanon for Table {
    fn normalize_book_title(&self, raw: &str) -> Result<String, RefError> {
        self.names
            .get(raw)
            .map(|s| s.to_string())
            .ok_or_else(|| RefError::UnknownBook(raw.to_string()))
    }

    fn chapter_count(&self, book: &str) -> Option<u32> {
        self.chapters.get(book).cloned()
    }
}

#[test]
fn test_text_to_references_with_custom_canon() {
    let citations = Citations::new(Table::new());
    let text = "In the beginning (Gen 1:1, 2:3-4) ... Ob 1:4 ... John 3:16 ... Gen 1:1";

    assert_eq!(
        citations.grep_references(text),
        vec!["Gen 1:1, 2:3-4", "Ob 1:4", "John 3:16", "Gen 1:1"]
    );

    // John is not in this canon.
    let refs = citations.get_unique_refs(text);
    assert_eq!(refs, vec!["Genesis 1:1", "Genesis 2:3-4", "Obadiah 1:4"]);

    let parsed = citations.parse_refs(&refs);
    let shapes: Vec<_> = parsed.iter().map(|r| r.shape()).collect();
    assert_eq!(
        shapes,
        vec![
            Some(Shape::SingleVerse),
            Some(Shape::SingleChapter),
            Some(Shape::ChapterOnly)
        ]
    );
    assert_eq!(parsed[2].book(), Some("Obadiah"));
    assert_eq!(parsed[2].start_chapter(), Some(4));
}

#[test]
fn test_parse_cv_with_custom_canon() {
    let citations = Citations::new(Table::new());
    assert_eq!(
        citations.parse_cv("1", Some("Exodus")),
        Err(RefError::UnknownBook("Exodus".to_string()))
    );
    let r = citations.parse_cv("2:3-4", Some("Gen")).unwrap();
    assert_eq!(r.book(), Some("Genesis"));
    assert_eq!(
        (r.start_chapter(), r.start_verse(), r.end_chapter(), r.end_verse()),
        (Some(2), Some(3), Some(2), Some(4))
    );
}

#[test]
fn test_default_pipeline() {
    let text = "Compare Rom 8:28 with Romans 8:28-39 and Ps 23. \
                See also 1 Cor 13:4–7, 13:13 and Jude 24-25.";
    let refs = bible_citations_rs::get_unique_refs(text);
    assert_eq!(
        refs,
        vec![
            "Romans 8:28",
            "Romans 8:28-39",
            "Psalms 23",
            "1 Corinthians 13:4–7",
            "1 Corinthians 13:13",
            "Jude 24-25",
        ]
    );

    let parsed = bible_citations_rs::parse_refs(&refs);
    assert_eq!(parsed.len(), 6);
    assert!(parsed[2].is_chapter_only());
    assert_eq!(parsed[3].end_verse(), Some(7));
    assert!(parsed[5].is_multiple_chapter());
}

#[test]
fn test_malformed_entries_are_skipped() {
    let parsed = bible_citations_rs::parse_refs(&["Gen 0:1", "Gen 1:1", "Chapter 4"]);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].start_verse(), Some(1));
}
