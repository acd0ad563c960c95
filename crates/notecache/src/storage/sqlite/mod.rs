//! SQLite storage backend.
//!
//! `rusqlite` does the work on a dedicated thread owned by `tokio-rusqlite`;
//! every call is raced against the request context.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteNoteStore;
