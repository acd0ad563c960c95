//! In-memory storage backend.
//!
//! Notes live in a `BTreeMap` behind an `RwLock`; nothing survives a restart.
//! Used as the `inmemory` backend and as the store in unit tests.

mod repository;

pub use repository::InMemoryNoteStore;
