use crate::config::BookshelfConfig;
use crate::model::{Book, LibraryStats};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;
pub mod shutdown;
pub mod stats;

#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    /// Holds config.json and, by default, the library file
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A book as shown to the user, with its 1-based position in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBook {
    pub index: usize,
    pub book: Book,
}

pub fn number_books<'a, I>(books: I) -> Vec<DisplayBook>
where
    I: IntoIterator<Item = &'a Book>,
{
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| DisplayBook {
            index: i + 1,
            book: book.clone(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    pub stats: Option<LibraryStats>,
    pub config: Option<BookshelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: BookshelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message was reported at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
