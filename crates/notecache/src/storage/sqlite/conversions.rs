//! SQLite row conversion functions.

use rusqlite::Row;

use notecache_core::note::Note;

/// Convert a SQLite row to a Note.
///
/// Expected columns: id, title, content
pub fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::schema;

    fn conn_with_rows() -> rusqlite::Connection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(schema::CREATE_TABLES).unwrap();
        conn.execute(schema::INSERT_NOTE, ("Buy milk", Some("2%")))
            .unwrap();
        conn.execute(schema::INSERT_NOTE, ("Call mom", None::<String>))
            .unwrap();
        conn
    }

    #[test]
    fn test_row_to_note_with_content() {
        let conn = conn_with_rows();
        let note = conn
            .query_row(schema::SELECT_NOTE_BY_ID, [1], row_to_note)
            .unwrap();

        assert_eq!(note, Note::new(1, "Buy milk").with_content("2%"));
    }

    #[test]
    fn test_row_to_note_null_content() {
        let conn = conn_with_rows();
        let note = conn
            .query_row(schema::SELECT_NOTE_BY_ID, [2], row_to_note)
            .unwrap();

        assert_eq!(note, Note::new(2, "Call mom"));
    }

    #[test]
    fn test_row_to_note_wrong_column_type() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let result = conn.query_row("SELECT 'x', 'title', NULL", [], row_to_note);

        assert!(matches!(
            result,
            Err(rusqlite::Error::InvalidColumnType(..))
        ));
    }
}
