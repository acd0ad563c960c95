use thiserror::Error;

use notecache_core::note::NoteError;
use notecache_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors returned by [`NoteService`](super::NoteService).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request was rejected before any I/O.
    #[error(transparent)]
    Validation(#[from] NoteError),
    #[error("Note not found: {id}")]
    NotFound { id: String },
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => ServiceError::NotFound { id },
            other => ServiceError::Repository(other),
        }
    }
}

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Repository` -> per [`repository_error_to_status_code`]
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::Validation(_) => 400,
        ServiceError::NotFound { .. } => 404,
        ServiceError::Repository(err) => repository_error_to_status_code(err),
    }
}
