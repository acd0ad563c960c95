//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `StoreError`.

use notecache_core::storage::StoreError;

/// Maps a rusqlite error to a StoreError.
///
/// - `CannotOpen` / `NotADatabase` → `StoreError::ConnectionFailed`
/// - Column type or conversion errors → `StoreError::InvalidData`
/// - All other errors → `StoreError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::CannotOpen | rusqlite::ErrorCode::NotADatabase
            ) =>
        {
            StoreError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::InvalidColumnType(..) | rusqlite::Error::FromSqlConversionFailure(..) => {
            StoreError::InvalidData(err.to_string())
        }

        _ => StoreError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a StoreError.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> StoreError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            StoreError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => StoreError::QueryFailed(err.to_string()),
    }
}
