//! # Line Codec
//!
//! Books are stored one per line as pipe-separated fields:
//!
//! ```text
//! <title>|<author>|<year>|<genre>|<read>
//! ```
//!
//! There is no escaping, so text fields may never contain the delimiter or a
//! line break. Encoding refuses such records instead of writing a line that
//! would decode differently.
//!
//! Decoding is strict about structure (exactly five fields, a numeric year)
//! and permissive about the read flag: only `true` in any letter case reads
//! as true, any other token reads as false.

use crate::error::{BookshelfError, Result};
use crate::model::{Book, BookField};

pub const DELIMITER: char = '|';
const FIELD_COUNT: usize = 5;
const TRUE_TOKEN: &str = "True";
const FALSE_TOKEN: &str = "False";

/// Returns why `value` cannot be stored in a single field, if it can't.
pub fn illegal_chars(value: &str) -> Option<&'static str> {
    if value.contains(DELIMITER) {
        Some("must not contain '|'")
    } else if value.contains(['\n', '\r']) {
        Some("must not contain line breaks")
    } else {
        None
    }
}

pub fn encode_line(book: &Book) -> Result<String> {
    for (field, value) in book.text_fields() {
        if let Some(reason) = illegal_chars(value) {
            return Err(BookshelfError::Encode {
                field,
                reason: reason.to_string(),
            });
        }
    }

    let read = if book.read { TRUE_TOKEN } else { FALSE_TOKEN };
    Ok(format!(
        "{}|{}|{}|{}|{}\n",
        book.title, book.author, book.year, book.genre, read
    ))
}

/// Decodes a single line. `line_number` is only used for error reporting.
pub fn decode_line(line: &str, line_number: usize) -> Result<Book> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);

    let malformed = |reason: String| BookshelfError::Decode {
        line: line_number,
        reason,
    };

    if line.is_empty() {
        return Err(malformed("empty line".to_string()));
    }

    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            parts.len()
        )));
    }

    let year = parse_year(parts[2])
        .ok_or_else(|| malformed(format!("{} is not a valid {}", parts[2], BookField::Year)))?;

    Ok(Book {
        title: parts[0].to_string(),
        author: parts[1].to_string(),
        year,
        genre: parts[3].to_string(),
        read: parts[4].trim().eq_ignore_ascii_case("true"),
    })
}

// `u32::from_str` accepts a leading '+', the storage format does not. Files
// written by other tools with a signed or space-padded year (`+1965`,
// ` 1965`) are rejected here and fail the whole load.
fn parse_year(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Encodes the whole collection, in order, as file contents.
pub fn encode_all(books: &[Book]) -> Result<String> {
    let mut out = String::new();
    for book in books {
        out.push_str(&encode_line(book)?);
    }
    Ok(out)
}

/// Decodes full file contents. The first malformed line aborts the load.
pub fn decode_all(contents: &str) -> Result<Vec<Book>> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| decode_line(line, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any text the format can hold: no delimiter, no line breaks
    const STORABLE_TEXT: &str = "[^|\\r\\n]{0,24}";

    fn storable_book() -> impl Strategy<Value = Book> {
        (
            STORABLE_TEXT,
            STORABLE_TEXT,
            any::<u32>(),
            STORABLE_TEXT,
            any::<bool>(),
        )
            .prop_map(|(title, author, year, genre, read)| Book {
                title,
                author,
                year,
                genre,
                read,
            })
    }

    proptest! {
        #[test]
        fn storable_books_survive_a_round_trip(book in storable_book()) {
            let line = encode_line(&book).unwrap();
            prop_assert_eq!(decode_line(&line, 1).unwrap(), book);
        }

        #[test]
        fn collections_survive_a_round_trip(books in prop::collection::vec(storable_book(), 0..8)) {
            let contents = encode_all(&books).unwrap();
            prop_assert_eq!(decode_all(&contents).unwrap(), books);
        }
    }

    fn dune() -> Book {
        Book::new("Dune", "Herbert", 1965, "SciFi", true)
    }

    #[test]
    fn encodes_pipe_separated_line() {
        assert_eq!(encode_line(&dune()).unwrap(), "Dune|Herbert|1965|SciFi|True\n");

        let mut unread = dune();
        unread.read = false;
        assert_eq!(
            encode_line(&unread).unwrap(),
            "Dune|Herbert|1965|SciFi|False\n"
        );
    }

    #[test]
    fn decode_reverses_encode() {
        let books = [
            dune(),
            Book::new("  Spaced  ", "A. Author", 1, "Essays & Notes", false),
            Book::new("Ünïcödé", "Tolstoy", 1869, "Novel", true),
        ];
        for book in books {
            let line = encode_line(&book).unwrap();
            assert_eq!(decode_line(&line, 1).unwrap(), book);
        }
    }

    #[test]
    fn encode_rejects_delimiter_and_line_breaks() {
        let mut book = dune();
        book.author = "Frank|Herbert".into();
        assert!(matches!(
            encode_line(&book),
            Err(BookshelfError::Encode {
                field: BookField::Author,
                ..
            })
        ));

        let mut book = dune();
        book.genre = "Sci\nFi".into();
        assert!(matches!(
            encode_line(&book),
            Err(BookshelfError::Encode {
                field: BookField::Genre,
                ..
            })
        ));

        let mut book = dune();
        book.title = "Du\rne".into();
        assert!(matches!(
            encode_line(&book),
            Err(BookshelfError::Encode {
                field: BookField::Title,
                ..
            })
        ));
    }

    #[test]
    fn read_flag_decodes_case_insensitively() {
        for token in ["true", "TRUE", "True", "tRuE", "true "] {
            let line = format!("T|A|2000|G|{}", token);
            assert!(decode_line(&line, 1).unwrap().read, "token {token:?}");
        }
    }

    #[test]
    fn unknown_read_tokens_decode_as_false() {
        for token in ["False", "no", "yes", "1", "", "garbage"] {
            let line = format!("T|A|2000|G|{}", token);
            assert!(!decode_line(&line, 1).unwrap().read, "token {token:?}");
        }
    }

    #[test]
    fn decode_strips_crlf() {
        let book = decode_line("Dune|Herbert|1965|SciFi|True\r\n", 1).unwrap();
        assert_eq!(book, dune());
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        let err = decode_line("Dune|Herbert|1965|SciFi", 3).unwrap_err();
        match err {
            BookshelfError::Decode { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("found 4"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(decode_line("a|b|1|c|True|extra", 1).is_err());
    }

    #[test]
    fn decode_rejects_bad_year() {
        for year in ["", "abc", "-1965", "+1965", "19 65", "99999999999"] {
            let line = format!("Dune|Herbert|{}|SciFi|True", year);
            assert!(
                matches!(
                    decode_line(&line, 1),
                    Err(BookshelfError::Decode { .. })
                ),
                "year {year:?}"
            );
        }
    }

    #[test]
    fn decode_rejects_empty_line() {
        assert!(matches!(
            decode_line("", 7),
            Err(BookshelfError::Decode { line: 7, .. })
        ));
    }

    #[test]
    fn decode_all_preserves_file_order() {
        let contents = "A|X|2000|G|True\nB|Y|2001|G|False\nC|Z|2002|G|true\n";
        let books = decode_all(contents).unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn decode_all_of_empty_contents_is_empty() {
        assert!(decode_all("").unwrap().is_empty());
    }

    #[test]
    fn decode_all_aborts_on_first_bad_line() {
        let contents = "A|X|2000|G|True\nB|Y|2001|G\nC|Z|2002|G|true\n";
        assert!(matches!(
            decode_all(contents),
            Err(BookshelfError::Decode { line: 2, .. })
        ));
    }

    #[test]
    fn encode_all_concatenates_lines() {
        let books = vec![dune(), Book::new("Emma", "Austen", 1815, "Novel", false)];
        assert_eq!(
            encode_all(&books).unwrap(),
            "Dune|Herbert|1965|SciFi|True\nEmma|Austen|1815|Novel|False\n"
        );
        assert_eq!(encode_all(&[]).unwrap(), "");
    }
}
