//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all bookshelf operations, regardless of the UI being used.
//!
//! The facade owns the [`Library`] (and through it the storage backend) for
//! the lifetime of the process, so no operation reaches for hidden global
//! state. It dispatches to `commands/*.rs` and returns structured
//! `Result<CmdResult>` values; it never prints.
//!
//! Configuration and initialisation work on the data directory and the raw
//! store, so they are free functions that never load the collection. They
//! keep working when the library file cannot be decoded.
//!
//! ## Generic Over DataStore
//!
//! `BookshelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `BookshelfApi<FileStore>`
//! - Testing: `BookshelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::library::{Library, NewBook};
use crate::model::SearchField;
use crate::store::DataStore;

/// The main API facade for bookshelf operations.
pub struct BookshelfApi<S: DataStore> {
    library: Library<S>,
}

impl<S: DataStore> BookshelfApi<S> {
    /// Loads the collection from `store`.
    pub fn open(store: S) -> Result<Self> {
        Ok(Self {
            library: Library::open(store)?,
        })
    }

    pub fn add_book(&mut self, new_book: NewBook) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.library, new_book)
    }

    pub fn remove_book(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.library, title)
    }

    pub fn search_books(&self, field: SearchField, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.library, field, keyword)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.library)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.library)
    }

    pub fn shutdown(&mut self) -> Result<commands::CmdResult> {
        commands::shutdown::run(&mut self.library)
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }
}

pub fn config(paths: &BookshelfPaths, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(paths, action)
}

/// Writes an empty library through `store` unless its file already exists.
pub fn init<S: DataStore>(store: &mut S, paths: &BookshelfPaths) -> Result<commands::CmdResult> {
    commands::init::run(store, paths)
}

pub use crate::commands::config::ConfigAction;
pub use crate::library::RemoveOutcome;
pub use commands::{BookshelfPaths, CmdMessage, CmdResult, DisplayBook, MessageLevel};
