use thiserror::Error;

use crate::context::ContextError;

/// Failure reported by a durable store.
///
/// A missing row is not a store error: point lookups return `Ok(None)` and
/// writes report zero affected rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Store operation interrupted: {0}")]
    Interrupted(#[from] ContextError),
}

/// Errors surfaced by a [`NoteRepository`](super::NoteRepository).
///
/// Cache failures never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{operation} failed: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl RepositoryError {
    pub fn note_not_found(id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity_type: "Note",
            id: id.to_string(),
        }
    }

    /// Returns a closure wrapping a [`StoreError`] with the operation name,
    /// for use with `map_err`.
    pub fn store(operation: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| RepositoryError::Store { operation, source }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::note_not_found(7);
        assert_eq!(error.to_string(), "Note not found: 7");
        assert!(matches!(error, RepositoryError::NotFound { entity_type: "Note", .. }));
    }

    #[test]
    fn test_repository_error_store_display() {
        let error = RepositoryError::store("update note")(StoreError::QueryFailed(
            "no such table: notes".to_string(),
        ));
        assert_eq!(
            error.to_string(),
            "update note failed: Query failed: no such table: notes"
        );
    }

    #[test]
    fn test_repository_error_store_source() {
        use std::error::Error as _;

        let error = RepositoryError::store("list notes")(StoreError::ConnectionFailed(
            "refused".to_string(),
        ));
        let source = error.source().map(|s| s.to_string());

        assert_eq!(source.as_deref(), Some("Connection failed: refused"));
    }

    #[test]
    fn test_store_error_from_context_error() {
        let error: StoreError = ContextError::DeadlineExceeded.into();
        assert_eq!(
            error.to_string(),
            "Store operation interrupted: Deadline exceeded"
        );
    }

    #[test]
    fn test_store_error_invalid_data_display() {
        let error = StoreError::InvalidData("title is NULL".to_string());
        assert_eq!(error.to_string(), "Invalid data: title is NULL");
    }
}
