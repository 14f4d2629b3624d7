use super::DataStore;
use crate::codec;
use crate::error::{BookshelfError, Result};
use crate::model::Book;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the value's lifetime.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: Option<String>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw file contents, as if read from disk.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// The encoded collection as last saved, `None` if never written.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Makes every subsequent save fail with an IO error.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl DataStore for InMemoryStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        match &self.contents {
            Some(contents) => codec::decode_all(contents),
            None => Ok(Vec::new()),
        }
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        let encoded = codec::encode_all(books)?;
        if self.fail_saves {
            return Err(BookshelfError::Io(io::Error::other("simulated write failure")));
        }
        self.contents = Some(encoded);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://library.txt")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        books: Vec<Book>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                books: Vec::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.books.push(Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    2000 + i as u32,
                    "Fiction",
                    i % 2 == 0,
                ));
            }
            self
        }

        pub fn with_book(mut self, book: Book) -> Self {
            self.books.push(book);
            self
        }

        /// Seeds the store with the collected books without counting a save.
        pub fn build(self) -> InMemoryStore {
            let mut store = self.store;
            store.contents = Some(
                codec::encode_all(&self.books).expect("fixture books must be encodable"),
            );
            store
        }
    }
}
