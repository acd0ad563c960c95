use async_trait::async_trait;

use crate::context::RequestContext;
use crate::note::{NewNote, Note, NoteId};

use super::{Result, StoreResult};

/// The durable, authoritative note store.
///
/// `update` and `delete` report the number of affected rows; zero is the only
/// "no such row" signal for those two operations. Implementations must abort
/// promptly when `ctx` is cancelled or its deadline passes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Inserts a note and returns the id assigned by the store.
    async fn insert(&self, ctx: &RequestContext, note: &NewNote) -> StoreResult<NoteId>;

    async fn get_by_id(&self, ctx: &RequestContext, id: NoteId) -> StoreResult<Option<Note>>;

    /// Returns every note ordered by id ascending.
    async fn list_all(&self, ctx: &RequestContext) -> StoreResult<Vec<Note>>;

    /// Overwrites title and content of the row with `note.id`.
    async fn update(&self, ctx: &RequestContext, note: &Note) -> StoreResult<u64>;

    async fn delete(&self, ctx: &RequestContext, id: NoteId) -> StoreResult<u64>;
}

/// Note persistence as seen by the service layer.
///
/// Missing notes surface as [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
/// from `get_by_id`, `update` and `delete`.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, ctx: &RequestContext, note: &NewNote) -> Result<NoteId>;

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Note>>;

    async fn get_by_id(&self, ctx: &RequestContext, id: NoteId) -> Result<Note>;

    async fn update(&self, ctx: &RequestContext, note: &Note) -> Result<()>;

    async fn delete(&self, ctx: &RequestContext, id: NoteId) -> Result<()>;
}
