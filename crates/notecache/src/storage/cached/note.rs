//! Cached note repository.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::Span;

use notecache_core::cache::{
    deserialize_note, deserialize_notes, invalidation_keys, note_key, serialize_note,
    serialize_notes, Cache, CacheLookup, NoteWrite, SerializationError, NOTES_ALL_KEY,
};
use notecache_core::context::RequestContext;
use notecache_core::note::{NewNote, Note, NoteId};
use notecache_core::storage::{NoteRepository, NoteStore, RepositoryError, Result};

/// Cache-aside [`NoteRepository`] over a durable [`NoteStore`].
///
/// # Type Parameters
///
/// * `S` - The durable store, authoritative for every result
/// * `C` - The cache; any failure of it is logged and absorbed
///
/// # Consistency
///
/// Invalidation runs only after the store reports success. A write that
/// fails or is interrupted skips invalidation, even though an interrupted
/// write may already have been applied (see `SqliteNoteStore`). Like a failed
/// invalidation, this leaves cached entries stale until their TTL expires.
pub struct CachedNoteRepository<S, C>
where
    S: NoteStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    ttl: Duration,
    span: Span,
}

impl<S, C> CachedNoteRepository<S, C>
where
    S: NoteStore,
    C: Cache,
{
    /// Creates a repository that caches reads for `ttl`.
    pub fn new(store: Arc<S>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            store,
            cache,
            ttl,
            span: tracing::info_span!("note_repository"),
        }
    }

    /// Replaces the span every event of this repository is recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    async fn lookup(&self, ctx: &RequestContext, key: &str) -> CacheLookup<Vec<u8>> {
        match ctx.run(self.cache.get(key)).await {
            Ok(result) => result.into(),
            Err(interrupted) => CacheLookup::Failure(interrupted.into()),
        }
    }

    /// Best-effort population after a successful store read.
    async fn populate(
        &self,
        ctx: &RequestContext,
        key: &str,
        bytes: std::result::Result<Vec<u8>, SerializationError>,
    ) {
        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(parent: &self.span, key, error = %err, "Failed to serialize cache value");
                return;
            }
        };

        match ctx.run(self.cache.set(key, &bytes, Some(self.ttl))).await {
            Ok(Ok(())) => {
                tracing::trace!(parent: &self.span, key, "Cache populated");
            }
            Ok(Err(err)) => {
                tracing::warn!(parent: &self.span, key, error = %err, "Failed to populate cache");
            }
            Err(interrupted) => {
                tracing::debug!(parent: &self.span, key, reason = %interrupted, "Cache population abandoned");
            }
        }
    }

    /// Invalidates every key affected by `write`. Runs only after the store
    /// acknowledged the write.
    async fn invalidate(&self, ctx: &RequestContext, write: NoteWrite) {
        for key in invalidation_keys(write) {
            match ctx.run(self.cache.delete(&key)).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    tracing::warn!(
                        parent: &self.span,
                        key = %key,
                        error = %err,
                        "Failed to invalidate cache, entry may be stale until TTL expiry"
                    );
                }
                Err(interrupted) => {
                    tracing::warn!(
                        parent: &self.span,
                        key = %key,
                        reason = %interrupted,
                        "Cache invalidation interrupted, entry may be stale until TTL expiry"
                    );
                }
            }
        }
    }
}

#[async_trait]
impl<S, C> NoteRepository for CachedNoteRepository<S, C>
where
    S: NoteStore + 'static,
    C: Cache + 'static,
{
    async fn create(&self, ctx: &RequestContext, note: &NewNote) -> Result<NoteId> {
        let id = self
            .store
            .insert(ctx, note)
            .await
            .map_err(RepositoryError::store("create note"))?;

        self.invalidate(ctx, NoteWrite::Create).await;

        tracing::debug!(parent: &self.span, note_id = id, "Note created");
        Ok(id)
    }

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Note>> {
        match self
            .lookup(ctx, NOTES_ALL_KEY)
            .await
            .decode(|bytes| deserialize_notes(&bytes))
        {
            CacheLookup::Hit(notes) => {
                tracing::trace!(parent: &self.span, count = notes.len(), "Cache hit for notes");
                return Ok(notes);
            }
            CacheLookup::Miss => {
                tracing::trace!(parent: &self.span, "Cache miss for notes");
            }
            CacheLookup::Failure(err) => {
                tracing::warn!(parent: &self.span, error = %err, "Cache read failed for notes, using store");
            }
        }

        let notes = self
            .store
            .list_all(ctx)
            .await
            .map_err(RepositoryError::store("list notes"))?;

        self.populate(ctx, NOTES_ALL_KEY, serialize_notes(&notes))
            .await;

        Ok(notes)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: NoteId) -> Result<Note> {
        let cache_key = note_key(id);

        match self
            .lookup(ctx, &cache_key)
            .await
            .decode(|bytes| deserialize_note(&bytes))
        {
            CacheLookup::Hit(note) => {
                tracing::trace!(parent: &self.span, note_id = id, "Cache hit for note");
                return Ok(note);
            }
            CacheLookup::Miss => {
                tracing::trace!(parent: &self.span, note_id = id, "Cache miss for note");
            }
            CacheLookup::Failure(err) => {
                tracing::warn!(parent: &self.span, note_id = id, error = %err, "Cache read failed for note, using store");
            }
        }

        let note = self
            .store
            .get_by_id(ctx, id)
            .await
            .map_err(RepositoryError::store("get note"))?
            .ok_or_else(|| RepositoryError::note_not_found(id))?;

        self.populate(ctx, &cache_key, serialize_note(&note)).await;

        Ok(note)
    }

    async fn update(&self, ctx: &RequestContext, note: &Note) -> Result<()> {
        let affected = self
            .store
            .update(ctx, note)
            .await
            .map_err(RepositoryError::store("update note"))?;

        if affected == 0 {
            return Err(RepositoryError::note_not_found(note.id));
        }

        self.invalidate(ctx, NoteWrite::Update(note.id)).await;

        tracing::debug!(parent: &self.span, note_id = note.id, "Note updated");
        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, id: NoteId) -> Result<()> {
        let affected = self
            .store
            .delete(ctx, id)
            .await
            .map_err(RepositoryError::store("delete note"))?;

        if affected == 0 {
            return Err(RepositoryError::note_not_found(id));
        }

        self.invalidate(ctx, NoteWrite::Delete(id)).await;

        tracing::debug!(parent: &self.span, note_id = id, "Note deleted");
        Ok(())
    }
}
