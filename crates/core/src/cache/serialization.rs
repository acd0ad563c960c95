//! Pure functions for serializing notes to and from cache bytes.
//!
//! Values are stored as JSON so cached entries stay readable from `redis-cli`.

use thiserror::Error;

use crate::note::Note;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a single note to JSON bytes.
pub fn serialize_note(note: &Note) -> Result<Vec<u8>> {
    serde_json::to_vec(note).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a single note.
pub fn deserialize_note(bytes: &[u8]) -> Result<Note> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a note listing to a JSON array. An empty slice becomes `[]`.
pub fn serialize_notes(notes: &[Note]) -> Result<Vec<u8>> {
    serde_json::to_vec(notes).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a JSON array to a note listing.
pub fn deserialize_notes(bytes: &[u8]) -> Result<Vec<Note>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
