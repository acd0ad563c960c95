use super::{CacheError, SerializationError};

/// Outcome of a cache read.
///
/// Keeps "the key is absent" apart from "the cache could not answer" so that
/// callers can log the latter while treating both as a reason to go to the
/// durable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
    Failure(CacheError),
}

impl<T> CacheLookup<T> {
    /// Decodes a hit. A value that fails to decode becomes a `Failure`.
    pub fn decode<U, F>(self, decode: F) -> CacheLookup<U>
    where
        F: FnOnce(T) -> Result<U, SerializationError>,
    {
        match self {
            CacheLookup::Hit(raw) => match decode(raw) {
                Ok(value) => CacheLookup::Hit(value),
                Err(e) => CacheLookup::Failure(e.into()),
            },
            CacheLookup::Miss => CacheLookup::Miss,
            CacheLookup::Failure(e) => CacheLookup::Failure(e),
        }
    }
}

impl<T> From<Result<Option<T>, CacheError>> for CacheLookup<T> {
    fn from(result: Result<Option<T>, CacheError>) -> Self {
        match result {
            Ok(Some(value)) => CacheLookup::Hit(value),
            Ok(None) => CacheLookup::Miss,
            Err(e) => CacheLookup::Failure(e),
        }
    }
}
