use crate::error::RefError;

/// Resolves free-form book names to canonical titles.
pub trait BookCanon {
    /// Canonical title for `raw`, or `RefError::UnknownBook`.
    fn normalize_book_title(&self, raw: &str) -> Result<String, RefError>;

    /// Number of chapters in a canonical book.
    fn chapter_count(&self, book: &str) -> Option<u32>;
}

impl<'a, C: BookCanon + ?Sized> BookCanon for &'a C {
    fn normalize_book_title(&self, raw: &str) -> Result<String, RefError> {
        (**self).normalize_book_title(raw)
    }

    fn chapter_count(&self, book: &str) -> Option<u32> {
        (**self).chapter_count(book)
    }
}

struct Book {
    title: &'static str,
    chapters: u32,
    aliases: &'static [&'static str],
}

const fn book(title: &'static str, chapters: u32, aliases: &'static [&'static str]) -> Book {
    Book {
        title,
        chapters,
        aliases,
    }
}

// Aliases are written as lookup keys: lowercase, no spaces or periods,
// ordinal prefix as a digit.
static BOOKS: &[Book] = &[
    book("Genesis", 50, &["gn", "ge"]),
    book("Exodus", 40, &["ex", "exo"]),
    book("Leviticus", 27, &["lv", "le"]),
    book("Numbers", 36, &["nm", "nu", "nb"]),
    book("Deuteronomy", 34, &["dt", "de"]),
    book("Joshua", 24, &["jos", "jsh"]),
    book("Judges", 21, &["judg", "jdg", "jg"]),
    book("Ruth", 4, &["ru", "rt"]),
    book("1 Samuel", 31, &["1sa", "1sm"]),
    book("2 Samuel", 24, &["2sa", "2sm"]),
    book("1 Kings", 22, &["1ki", "1kgs", "1kg"]),
    book("2 Kings", 25, &["2ki", "2kgs", "2kg"]),
    book("1 Chronicles", 29, &["1ch", "1chr"]),
    book("2 Chronicles", 36, &["2ch", "2chr"]),
    book("Ezra", 10, &["ezr"]),
    book("Nehemiah", 13, &["ne"]),
    book("Esther", 10, &["es", "est"]),
    book("Job", 42, &["jb"]),
    book("Psalms", 150, &["ps", "psalm", "pss", "psa"]),
    book("Proverbs", 31, &["pr", "prv"]),
    book("Ecclesiastes", 12, &["ec", "qoh", "qoheleth"]),
    book("Song of Solomon", 8, &["song", "songofsongs", "sos", "canticles", "cant"]),
    book("Isaiah", 66, &["is", "isa"]),
    book("Jeremiah", 52, &["jr", "je"]),
    book("Lamentations", 5, &["la", "lm"]),
    book("Ezekiel", 48, &["ezk", "eze"]),
    book("Daniel", 12, &["dn", "da"]),
    book("Hosea", 14, &["hs", "ho"]),
    book("Joel", 3, &["jl"]),
    book("Amos", 9, &["am"]),
    book("Obadiah", 1, &["ob"]),
    book("Jonah", 4, &["jnh", "jon"]),
    book("Micah", 7, &["mi", "mc"]),
    book("Nahum", 3, &["na"]),
    book("Habakkuk", 3, &["hb", "hab"]),
    book("Zephaniah", 3, &["zp", "zep"]),
    book("Haggai", 2, &["hg", "hag"]),
    book("Zechariah", 14, &["zc", "zec"]),
    book("Malachi", 4, &["ml", "mal"]),
    book("Matthew", 28, &["mt", "matt"]),
    book("Mark", 16, &["mk", "mr", "mrk"]),
    book("Luke", 24, &["lk", "lu"]),
    book("John", 21, &["jn", "jhn"]),
    book("Acts", 28, &["ac", "actsoftheapostles"]),
    book("Romans", 16, &["ro", "rm"]),
    book("1 Corinthians", 16, &["1co", "1cor"]),
    book("2 Corinthians", 13, &["2co", "2cor"]),
    book("Galatians", 6, &["ga", "gl"]),
    book("Ephesians", 6, &["ep", "eph"]),
    book("Philippians", 4, &["phil", "php", "pp"]),
    book("Colossians", 4, &["co", "col"]),
    book("1 Thessalonians", 5, &["1th", "1thess"]),
    book("2 Thessalonians", 3, &["2th", "2thess"]),
    book("1 Timothy", 6, &["1ti", "1tm"]),
    book("2 Timothy", 4, &["2ti", "2tm"]),
    book("Titus", 3, &["ti", "tt"]),
    book("Philemon", 1, &["phlm", "philem", "phm"]),
    book("Hebrews", 13, &["he", "heb"]),
    book("James", 5, &["jas", "jm"]),
    book("1 Peter", 5, &["1pe", "1pt", "1pet"]),
    book("2 Peter", 3, &["2pe", "2pt", "2pet"]),
    book("1 John", 5, &["1jn", "1jo", "1jhn"]),
    book("2 John", 1, &["2jn", "2jo", "2jhn"]),
    book("3 John", 1, &["3jn", "3jo", "3jhn"]),
    book("Jude", 1, &["jud", "jd"]),
    book("Revelation", 22, &["re", "rev", "rv", "revelations", "apocalypse"]),
];

const MIN_PREFIX: usize = 3;

/// Lookup key for a book name: lowercase, without periods or whitespace,
/// with a leading ordinal word turned into its digit ("II Kings" -> "2kings").
fn book_key(raw: &str) -> String {
    let cleaned = raw.replace('.', " ");
    let mut words = cleaned.split_whitespace();
    let mut key = String::with_capacity(raw.len());

    if let Some(first) = words.next() {
        let ordinal = match first.to_lowercase().as_str() {
            "i" | "first" => Some('1'),
            "ii" | "second" => Some('2'),
            "iii" | "third" => Some('3'),
            "iv" | "fourth" => Some('4'),
            _ => None,
        };
        match ordinal {
            // A lone "I" is the pronoun, not an ordinal.
            Some(digit) if cleaned.split_whitespace().count() > 1 => key.push(digit),
            _ => key.push_str(&first.to_lowercase()),
        }
    }
    for word in words {
        key.push_str(&word.to_lowercase());
    }
    key
}

/// The 66-book Protestant canon with English titles.
#[derive(Debug, Default, Clone, Copy)]
pub struct Canon;

impl Canon {
    fn lookup(&self, raw: &str) -> Option<&'static Book> {
        let key = book_key(raw);
        if key.is_empty() {
            return None;
        }

        if let Some(found) = BOOKS.iter().find(|b| book_key(b.title) == key) {
            return Some(found);
        }
        if let Some(found) = BOOKS.iter().find(|b| b.aliases.contains(&key.as_str())) {
            return Some(found);
        }
        if key.len() < MIN_PREFIX {
            return None;
        }

        let mut candidates = BOOKS.iter().filter(|b| book_key(b.title).starts_with(&key));
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Canonical titles in canon order.
    pub fn titles(&self) -> impl Iterator<Item = &'static str> {
        BOOKS.iter().map(|b| b.title)
    }
}

impl BookCanon for Canon {
    fn normalize_book_title(&self, raw: &str) -> Result<String, RefError> {
        self.lookup(raw)
            .map(|b| b.title.to_string())
            .ok_or_else(|| RefError::UnknownBook(raw.to_string()))
    }

    fn chapter_count(&self, book: &str) -> Option<u32> {
        BOOKS.iter().find(|b| b.title == book).map(|b| b.chapters)
    }
}
