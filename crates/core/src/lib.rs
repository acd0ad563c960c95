//! Core types and traits for notecache.
//!
//! Following the Functional Core pattern, this crate holds pure data types,
//! validation rules and the capability traits (`Cache`, `NoteStore`,
//! `NoteRepository`). Concrete backends live in the `notecache` crate.

pub mod cache;
pub mod context;
pub mod note;
pub mod serde;
pub mod storage;
