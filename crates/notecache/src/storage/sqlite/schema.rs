//! SQLite schema definitions and SQL query constants.

/// Creates the notes table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT
);
"#;

pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (title, content)
VALUES (?1, ?2)
"#;

pub const SELECT_NOTE_BY_ID: &str = r#"
SELECT id, title, content
FROM notes
WHERE id = ?1
"#;

pub const SELECT_ALL_NOTES: &str = r#"
SELECT id, title, content
FROM notes
ORDER BY id ASC
"#;

pub const UPDATE_NOTE: &str = r#"
UPDATE notes
SET title = ?1, content = ?2
WHERE id = ?3
"#;

pub const DELETE_NOTE: &str = r#"
DELETE FROM notes
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();
        // Idempotent.
        conn.execute_batch(CREATE_TABLES).unwrap();
    }

    #[test]
    fn test_queries_prepare() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        for sql in [
            INSERT_NOTE,
            SELECT_NOTE_BY_ID,
            SELECT_ALL_NOTES,
            UPDATE_NOTE,
            DELETE_NOTE,
        ] {
            assert!(conn.prepare(sql).is_ok(), "failed to prepare: {sql}");
        }
    }

    #[test]
    fn test_listing_is_ordered_by_id() {
        assert!(SELECT_ALL_NOTES.contains("ORDER BY id ASC"));
    }
}
