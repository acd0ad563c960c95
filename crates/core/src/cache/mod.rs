mod error;
mod keys;
mod lookup;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{invalidation_keys, note_key, NoteWrite, DEFAULT_NOTE_TTL, NOTES_ALL_KEY};
pub use lookup::CacheLookup;
pub use serialization::{
    deserialize_note, deserialize_notes, serialize_note, serialize_notes, SerializationError,
};
pub use traits::Cache;
