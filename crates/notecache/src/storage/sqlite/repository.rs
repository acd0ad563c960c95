//! SQLite note store.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use notecache_core::context::RequestContext;
use notecache_core::note::{NewNote, Note, NoteId};
use notecache_core::storage::{NoteStore, StoreError, StoreResult};

use super::conversions::row_to_note;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed [`NoteStore`].
///
/// A single connection serializes all statements on its worker thread.
///
/// Interrupting a call through the request context stops waiting for it, but
/// a statement that already reached the worker thread still runs to
/// completion. An interrupted write may therefore have been applied.
pub struct SqliteNoteStore {
    conn: Connection,
}

impl SqliteNoteStore {
    /// Opens (or creates) the database file at `path` and ensures the schema.
    pub async fn new(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a private in-memory database.
    pub async fn new_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn insert(&self, ctx: &RequestContext, note: &NewNote) -> StoreResult<NoteId> {
        let title = note.title.clone();
        let content = note.content.clone();

        ctx.run(self.conn.call(move |conn| {
            conn.execute(schema::INSERT_NOTE, (&title, &content))
                .map_err(wrap_err)?;
            Ok(conn.last_insert_rowid())
        }))
        .await?
        .map_err(map_tokio_rusqlite_error)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: NoteId) -> StoreResult<Option<Note>> {
        ctx.run(self.conn.call(move |conn| {
            let mut stmt = conn.prepare(schema::SELECT_NOTE_BY_ID).map_err(wrap_err)?;
            match stmt.query_row([id], row_to_note) {
                Ok(note) => Ok(Some(note)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        }))
        .await?
        .map_err(map_tokio_rusqlite_error)
    }

    async fn list_all(&self, ctx: &RequestContext) -> StoreResult<Vec<Note>> {
        ctx.run(self.conn.call(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_ALL_NOTES).map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_note).map_err(wrap_err)?;

            let mut notes = Vec::new();
            for row_result in rows {
                notes.push(row_result.map_err(wrap_err)?);
            }
            Ok(notes)
        }))
        .await?
        .map_err(map_tokio_rusqlite_error)
    }

    async fn update(&self, ctx: &RequestContext, note: &Note) -> StoreResult<u64> {
        let id = note.id;
        let title = note.title.clone();
        let content = note.content.clone();

        ctx.run(self.conn.call(move |conn| {
            let affected = conn
                .execute(schema::UPDATE_NOTE, (&title, &content, id))
                .map_err(wrap_err)?;
            Ok(affected as u64)
        }))
        .await?
        .map_err(map_tokio_rusqlite_error)
    }

    async fn delete(&self, ctx: &RequestContext, id: NoteId) -> StoreResult<u64> {
        ctx.run(self.conn.call(move |conn| {
            let affected = conn.execute(schema::DELETE_NOTE, [id]).map_err(wrap_err)?;
            Ok(affected as u64)
        }))
        .await?
        .map_err(map_tokio_rusqlite_error)
    }
}
