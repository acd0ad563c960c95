//! Pure validation rules for notes.

use super::NoteError;

/// Validates a note title.
///
/// The only rule is that a title is not empty. Whitespace-only and long
/// titles are stored as given.
///
/// # Examples
///
/// ```
/// use notecache_core::note::{validate_title, NoteError};
///
/// assert!(validate_title("Buy milk").is_ok());
/// assert!(validate_title("   ").is_ok());
/// assert_eq!(validate_title(""), Err(NoteError::EmptyTitle));
/// ```
pub fn validate_title(title: &str) -> Result<(), NoteError> {
    if title.is_empty() {
        return Err(NoteError::EmptyTitle);
    }
    Ok(())
}
