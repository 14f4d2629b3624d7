//! # Record Store
//!
//! [`Library`] owns the canonical collection for the lifetime of the process.
//! It is loaded once from a [`DataStore`] when opened, and every successful
//! mutation immediately rewrites the store in full. There is no "unsaved
//! changes" state.
//!
//! Mutations are all-or-nothing from the caller's point of view: input is
//! validated before the collection is touched, and if the save that follows a
//! change fails, the change is undone before the error is returned.

use crate::codec;
use crate::error::{BookshelfError, Result};
use crate::model::{Book, BookField, LibraryStats, SearchField};
use crate::store::DataStore;
use std::path::PathBuf;

/// Field values for a book that has not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
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

    /// Checks every field and converts into a storable [`Book`].
    pub fn validate(self) -> Result<Book> {
        let book = Book {
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
            read: self.read,
        };

        for (field, value) in book.text_fields() {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
            if let Some(reason) = codec::illegal_chars(value) {
                return Err(invalid(field, reason));
            }
        }
        if book.year < 1 {
            return Err(invalid(BookField::Year, "must be at least 1"));
        }

        Ok(book)
    }
}

fn invalid(field: BookField, reason: &str) -> BookshelfError {
    BookshelfError::Validation {
        field,
        reason: reason.to_string(),
    }
}

/// Result of [`Library::remove`]. Not finding a match is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Book),
    NotFound,
}

pub struct Library<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> Library<S> {
    /// Loads the collection from `store`. A malformed store fails the open.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load_books()?;
        tracing::debug!(books = books.len(), location = %store.location().display(), "Library opened");
        Ok(Self { store, books })
    }

    pub fn add(&mut self, new_book: NewBook) -> Result<&Book> {
        let book = new_book.validate()?;
        self.books.push(book);

        if let Err(e) = self.store.save_books(&self.books) {
            self.books.pop();
            return Err(e);
        }

        let added = &self.books[self.books.len() - 1];
        tracing::info!(title = %added.title, "Book added");
        Ok(added)
    }

    /// Removes the first book whose title matches, ignoring case.
    pub fn remove(&mut self, title: &str) -> Result<RemoveOutcome> {
        let needle = title.to_lowercase();
        let Some(position) = self
            .books
            .iter()
            .position(|b| b.title.to_lowercase() == needle)
        else {
            tracing::debug!(title, "No book to remove");
            return Ok(RemoveOutcome::NotFound);
        };

        let removed = self.books.remove(position);
        if let Err(e) = self.store.save_books(&self.books) {
            self.books.insert(position, removed);
            return Err(e);
        }

        tracing::info!(title = %removed.title, position, "Book removed");
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Books whose `field` contains `keyword`, ignoring case. An empty keyword
    /// matches everything.
    pub fn search(&self, field: SearchField, keyword: &str) -> Vec<&Book> {
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|b| field.value(b).to_lowercase().contains(&needle))
            .collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats::from_books(&self.books)
    }

    /// Writes the current collection unconditionally.
    pub fn shutdown(&mut self) -> Result<()> {
        self.store.save_books(&self.books)?;
        tracing::debug!(books = self.books.len(), "Library saved on shutdown");
        Ok(())
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
