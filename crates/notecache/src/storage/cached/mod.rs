//! Cache-aside repository.
//!
//! [`CachedNoteRepository`] turns a [`NoteStore`](notecache_core::storage::NoteStore)
//! and a [`Cache`](notecache_core::cache::Cache) into a
//! [`NoteRepository`](notecache_core::storage::NoteRepository):
//!
//! - **Reads**: check the cache, fall back to the store on miss or cache
//!   failure, then populate the cache on a best-effort basis.
//! - **Writes**: mutate the store, then invalidate the affected keys. Writes
//!   never populate the cache.
//!
//! # Consistency
//!
//! Staleness is bounded by the invalidation that follows every successful
//! write. When invalidation fails (cache down, request interrupted) a stale
//! entry can be served until its TTL expires. The same holds when the store
//! write itself is interrupted after it was applied: the operation reports
//! `Interrupted`, invalidation is skipped and the cached entries keep the old
//! value until their TTL expires. Cache failures never change the
//! result of an operation, only its latency.
//!
//! # Example
//!
//! ```ignore
//! let store = Arc::new(SqliteNoteStore::new("notes.db").await?);
//! let cache = Arc::new(MemoryCache::new(NonZeroUsize::new(10_000).unwrap()));
//!
//! let repo = CachedNoteRepository::new(store, cache, DEFAULT_NOTE_TTL);
//! ```

mod note;

pub use note::CachedNoteRepository;
