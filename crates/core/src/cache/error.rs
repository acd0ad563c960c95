use thiserror::Error;

use crate::context::ContextError;

use super::SerializationError;

/// Errors that can occur during cache operations.
///
/// A missing key is not an error: `Cache::get` reports it as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Cache operation interrupted: {0}")]
    Interrupted(#[from] ContextError),
}

impl From<SerializationError> for CacheError {
    fn from(err: SerializationError) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
