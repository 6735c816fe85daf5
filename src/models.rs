use serde_derive::Serialize;

/// Which of the four reference forms a `Reference` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `John 3`
    ChapterOnly,
    /// `John 3:16-18` or `John 3-3`
    SingleChapter,
    /// `John 3-4` or `John 3:16-4:2`
    MultipleChapter,
    /// `John 3:16`
    SingleVerse,
}

/// A single canonical scripture reference.
///
/// Values are built once through [`Reference::new`] and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    book: Option<String>,
    start_chapter: Option<u32>,
    start_verse: Option<u32>,
    end_chapter: Option<u32>,
    end_verse: Option<u32>,
}

impl Reference {
    /// Builds a reference from raw bounds.
    ///
    /// `chapter_count` is the number of chapters in `book`. For one-chapter
    /// books a verse number is really the chapter number, so when a start
    /// verse is present the verses are moved into the chapter slots.
    pub fn new(
        book: Option<String>,
        chapter_count: Option<u32>,
        start_chapter: Option<u32>,
        start_verse: Option<u32>,
        end_chapter: Option<u32>,
        end_verse: Option<u32>,
    ) -> Reference {
        if chapter_count == Some(1) && start_verse.is_some() {
            return Reference {
                book,
                start_chapter: start_verse,
                start_verse: None,
                end_chapter: end_verse,
                end_verse: None,
            };
        }

        Reference {
            book,
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
        }
    }

    pub fn book(&self) -> Option<&str> {
        self.book.as_ref().map(String::as_str)
    }

    pub fn start_chapter(&self) -> Option<u32> {
        self.start_chapter
    }

    pub fn start_verse(&self) -> Option<u32> {
        self.start_verse
    }

    pub fn end_chapter(&self) -> Option<u32> {
        self.end_chapter
    }

    pub fn end_verse(&self) -> Option<u32> {
        self.end_verse
    }

    pub fn is_chapter_only(&self) -> bool {
        self.start_chapter.is_some() && self.start_verse.is_none() && self.end_verse.is_none()
    }

    pub fn is_single_chapter(&self) -> bool {
        self.start_chapter.is_some()
            && (self.end_chapter.is_none() || self.end_chapter == self.start_chapter)
    }

    pub fn is_multiple_chapter(&self) -> bool {
        match (self.start_chapter, self.end_chapter) {
            (Some(start), Some(end)) => start != end,
            _ => false,
        }
    }

    pub fn is_single_verse(&self) -> bool {
        self.start_chapter.is_some()
            && self.start_verse.is_some()
            && self.end_chapter.is_none()
            && self.end_verse.is_none()
    }

    /// The most specific shape this reference matches, or `None` when it
    /// has no start chapter.
    pub fn shape(&self) -> Option<Shape> {
        if self.is_single_verse() {
            Some(Shape::SingleVerse)
        } else if self.is_multiple_chapter() {
            Some(Shape::MultipleChapter)
        } else if self.is_chapter_only() {
            Some(Shape::ChapterOnly)
        } else if self.is_single_chapter() {
            Some(Shape::SingleChapter)
        } else {
            None
        }
    }
}
