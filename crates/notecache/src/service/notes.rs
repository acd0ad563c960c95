//! Note service.

use std::sync::Arc;

use tracing::Span;

use notecache_core::context::RequestContext;
use notecache_core::note::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest};
use notecache_core::storage::NoteRepository;

use super::ServiceError;

type Result<T> = std::result::Result<T, ServiceError>;

/// Note use cases over any [`NoteRepository`].
///
/// # Concurrent updates
///
/// [`NoteService::update`] is a read-modify-write with no version check. Two
/// concurrent updates of the same note can both read the same original and
/// the later write silently discards the earlier one (lost update). Callers
/// that need stronger guarantees must serialize updates per note.
pub struct NoteService<R: NoteRepository + ?Sized> {
    repository: Arc<R>,
    span: Span,
}

impl<R: NoteRepository + ?Sized> NoteService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            span: tracing::info_span!("note_service"),
        }
    }

    /// Replaces the span every event of this service is recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Validates and persists a new note, returning it with its assigned id.
    pub async fn create(&self, ctx: &RequestContext, request: CreateNoteRequest) -> Result<Note> {
        let new_note = request.into_new_note().inspect_err(|err| {
            tracing::debug!(parent: &self.span, error = %err, "Rejected note creation");
        })?;

        let id = self
            .repository
            .create(ctx, &new_note)
            .await
            .map_err(|e| self.failed("create", e.into()))?;

        tracing::info!(parent: &self.span, note_id = id, request_id = %ctx.request_id(), "Note created");
        Ok(new_note.into_note(id))
    }

    pub async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Note>> {
        let notes = self
            .repository
            .list_all(ctx)
            .await
            .map_err(|e| self.failed("list", e.into()))?;

        tracing::info!(parent: &self.span, count = notes.len(), request_id = %ctx.request_id(), "Notes listed");
        Ok(notes)
    }

    pub async fn get_by_id(&self, ctx: &RequestContext, id: NoteId) -> Result<Note> {
        let note = self
            .repository
            .get_by_id(ctx, id)
            .await
            .map_err(|e| self.failed("get", e.into()))?;

        tracing::info!(parent: &self.span, note_id = id, request_id = %ctx.request_id(), "Note fetched");
        Ok(note)
    }

    /// Applies `request` on top of the stored note and persists the result.
    ///
    /// Fields absent from `request` keep their stored value. See the type
    /// level docs for the lost-update hazard.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: NoteId,
        request: UpdateNoteRequest,
    ) -> Result<Note> {
        request.validate().inspect_err(|err| {
            tracing::debug!(parent: &self.span, note_id = id, error = %err, "Rejected note update");
        })?;

        let mut note = self
            .repository
            .get_by_id(ctx, id)
            .await
            .map_err(|e| self.failed("update", e.into()))?;

        request.apply_to(&mut note);

        self.repository
            .update(ctx, &note)
            .await
            .map_err(|e| self.failed("update", e.into()))?;

        tracing::info!(parent: &self.span, note_id = id, request_id = %ctx.request_id(), "Note updated");
        Ok(note)
    }

    /// Deletes a note. Fails with `NotFound` if it does not exist.
    pub async fn delete(&self, ctx: &RequestContext, id: NoteId) -> Result<()> {
        self.repository
            .get_by_id(ctx, id)
            .await
            .map_err(|e| self.failed("delete", e.into()))?;

        self.repository
            .delete(ctx, id)
            .await
            .map_err(|e| self.failed("delete", e.into()))?;

        tracing::info!(parent: &self.span, note_id = id, request_id = %ctx.request_id(), "Note deleted");
        Ok(())
    }

    /// Logs a failed operation at a level matching its cause.
    fn failed(&self, operation: &'static str, err: ServiceError) -> ServiceError {
        match &err {
            ServiceError::Repository(source) => {
                tracing::error!(parent: &self.span, operation, error = %source, "Note operation failed");
            }
            ServiceError::NotFound { id } => {
                tracing::debug!(parent: &self.span, operation, note_id = %id, "Note not found");
            }
            ServiceError::Validation(_) => {}
        }
        err
    }
}
