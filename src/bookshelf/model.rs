use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: u32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// The free-text fields, in storage order.
    pub fn text_fields(&self) -> [(BookField, &str); 3] {
        [
            (BookField::Title, self.title.as_str()),
            (BookField::Author, self.author.as_str()),
            (BookField::Genre, self.genre.as_str()),
        ]
    }
}

/// Names a field of [`Book`] so errors can say which one was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookField {
    Title,
    Author,
    Year,
    Genre,
    Read,
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Year => "year",
            BookField::Genre => "genre",
            BookField::Read => "read",
        };
        f.write_str(name)
    }
}

/// The attributes a keyword search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    pub fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub percent_read: f64,
}

impl LibraryStats {
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|b| b.read).count();
        let percent_read = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total,
            read,
            percent_read,
        }
    }
}
