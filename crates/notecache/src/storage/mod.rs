//! Storage backend implementations.
//!
//! Concrete implementations of `notecache_core::storage::NoteStore`, selected
//! at compile time via feature flags, plus the cache-aside decorator that
//! turns any of them into a `NoteRepository`.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-local storage, lost on restart
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p notecache
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p notecache --no-default-features --features inmemory,memory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p notecache --features sqlite"
);

pub mod cached;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

pub use cached::CachedNoteRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteNoteStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryNoteStore;
