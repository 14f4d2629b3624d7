//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic book catalog library**. The `bookshelf` binary is
//! one client of it; the same core could sit behind a TUI or a web form.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Library              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns record store outcomes into CmdResult + messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (library.rs)                                  │
//! │  - The in-memory collection, validation, add/remove/search  │
//! │  - Saves the full collection after every mutation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - DataStore trait: FileStore (production),                 │
//! │    InMemoryStore (testing)                                  │
//! │  - Pipe-separated line format                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>` or plain values, and never writes to stdout/stderr or
//! exits the process. Diagnostics go through `tracing`; the binary decides
//! where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`library`]: The record store
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Line format encoding and decoding
//! - [`model`]: Core data types (`Book`, `SearchField`, `LibraryStats`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
