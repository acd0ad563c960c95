//! In-memory note store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notecache_core::context::RequestContext;
use notecache_core::note::{NewNote, Note, NoteId};
use notecache_core::storage::{NoteStore, StoreResult};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<NoteId, Note>,
    last_id: NoteId,
}

/// In-memory [`NoteStore`] with auto-incrementing ids.
///
/// Ids are never reused, even after the highest one is deleted. Clones share
/// the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn insert(&self, ctx: &RequestContext, note: &NewNote) -> StoreResult<NoteId> {
        let mut table = ctx.run(self.table.write()).await?;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, note.clone().into_note(id));
        Ok(id)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: NoteId) -> StoreResult<Option<Note>> {
        let table = ctx.run(self.table.read()).await?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list_all(&self, ctx: &RequestContext) -> StoreResult<Vec<Note>> {
        let table = ctx.run(self.table.read()).await?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, ctx: &RequestContext, note: &Note) -> StoreResult<u64> {
        let mut table = ctx.run(self.table.write()).await?;
        match table.rows.get_mut(&note.id) {
            Some(row) => {
                *row = note.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, ctx: &RequestContext, id: NoteId) -> StoreResult<u64> {
        let mut table = ctx.run(self.table.write()).await?;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notecache_core::context::ContextError;
    use notecache_core::storage::StoreError;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryNoteStore::new();
        let ctx = RequestContext::new();

        let id = store.insert(&ctx, &NewNote::new("Buy milk")).await.unwrap();

        assert_eq!(id, 1);
        assert_eq!(
            store.get_by_id(&ctx, id).await.unwrap(),
            Some(Note::new(1, "Buy milk"))
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = InMemoryNoteStore::new();
        assert!(store
            .get_by_id(&RequestContext::new(), 1)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_id() {
        let store = InMemoryNoteStore::new();
        let ctx = RequestContext::new();
        for title in ["a", "b", "c"] {
            store.insert(&ctx, &NewNote::new(title)).await.unwrap();
        }

        let ids: Vec<NoteId> = store
            .list_all(&ctx)
            .await
            .unwrap()
            .iter()
            .map(|n| n.id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_affected_rows() {
        let store = InMemoryNoteStore::new();
        let ctx = RequestContext::new();
        let id = store.insert(&ctx, &NewNote::new("Buy milk")).await.unwrap();

        assert_eq!(store.update(&ctx, &Note::new(id, "Buy oat milk")).await.unwrap(), 1);
        assert_eq!(store.update(&ctx, &Note::new(99, "ghost")).await.unwrap(), 0);
        assert_eq!(store.delete(&ctx, id).await.unwrap(), 1);
        assert_eq!(store.delete(&ctx, id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = InMemoryNoteStore::new();
        let ctx = RequestContext::new();
        let id = store.insert(&ctx, &NewNote::new("a")).await.unwrap();
        store.delete(&ctx, id).await.unwrap();

        let next = store.insert(&ctx, &NewNote::new("b")).await.unwrap();

        assert_eq!(next, id + 1);
    }

    #[tokio::test]
    async fn test_cancelled_context_aborts() {
        let store = InMemoryNoteStore::new();
        let ctx = RequestContext::new();
        ctx.cancel();

        let result = store.insert(&ctx, &NewNote::new("a")).await;

        assert_eq!(result, Err(StoreError::Interrupted(ContextError::Cancelled)));
    }
}
