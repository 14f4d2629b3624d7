//! # Storage Layer
//!
//! This module defines the storage abstraction for bookshelf. The [`DataStore`]
//! trait is the durable side of the record store: it can load the whole
//! collection and replace it wholesale, nothing more.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One pipe-separated line per book (see [`crate::codec`])
//!   - Every save rewrites the whole file through a temp file + rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Holds the encoded text, so the codec is exercised exactly as on disk
//!   - Counts saves, letting tests assert that read-only paths never write
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── library.txt     # The collection, one book per line
//! └── config.json     # Configuration (see crate::config)
//! ```

use crate::error::Result;
use crate::model::Book;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for collection persistence.
pub trait DataStore {
    /// Load every book, in stored order. Missing storage is an empty collection.
    fn load_books(&self) -> Result<Vec<Book>>;

    /// Replace the stored collection with `books`.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;

    /// Where the collection lives, for display purposes.
    fn location(&self) -> PathBuf;
}
