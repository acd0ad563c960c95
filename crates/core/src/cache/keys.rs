use std::time::Duration;

use crate::note::NoteId;

/// Cache key holding the full note listing.
pub const NOTES_ALL_KEY: &str = "notes:all";

/// TTL applied to every cached note and to the listing.
pub const DEFAULT_NOTE_TTL: Duration = Duration::from_secs(5 * 60);

/// Returns the cache key for a single note.
pub fn note_key(id: NoteId) -> String {
    format!("note:{}", id)
}

/// A successful write against the durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteWrite {
    Create,
    Update(NoteId),
    Delete(NoteId),
}

/// Returns the keys that must be invalidated after `write` is durable.
///
/// The listing is a view over every note, so any write invalidates it. A
/// freshly created note cannot have a singular entry yet, so create only
/// touches the listing.
///
/// # Examples
///
/// ```
/// use notecache_core::cache::{invalidation_keys, NoteWrite};
///
/// assert_eq!(invalidation_keys(NoteWrite::Create), vec!["notes:all"]);
/// assert_eq!(
///     invalidation_keys(NoteWrite::Delete(7)),
///     vec!["note:7", "notes:all"]
/// );
/// ```
pub fn invalidation_keys(write: NoteWrite) -> Vec<String> {
    match write {
        NoteWrite::Create => vec![NOTES_ALL_KEY.to_string()],
        NoteWrite::Update(id) | NoteWrite::Delete(id) => {
            vec![note_key(id), NOTES_ALL_KEY.to_string()]
        }
    }
}
