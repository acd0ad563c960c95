//! Pure functions for mapping storage errors to HTTP status codes.

use super::{RepositoryError, StoreError};

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Interrupted` -> 408 (Request Timeout)
/// - `QueryFailed` / `InvalidData` -> 500 (Internal Server Error)
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::ConnectionFailed(_) => 503,
        StoreError::Interrupted(_) => 408,
        StoreError::QueryFailed(_) => 500,
        StoreError::InvalidData(_) => 500,
    }
}

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// # Examples
///
/// ```
/// use notecache_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::note_not_found(1);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Store { source, .. } => store_error_to_status_code(source),
    }
}
