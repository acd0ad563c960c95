//! API request types for note operations.
//!
//! Pure data types shared by the service layer and the HTTP transport.

use serde::{Deserialize, Serialize};

use super::{operations::validate_title, NewNote, Note, NoteError};

/// Request payload for creating a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CreateNoteRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
        }
    }

    /// Set the note content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Convert into a validated, not yet persisted note.
    pub fn into_new_note(self) -> Result<NewNote, NoteError> {
        let note = NewNote {
            title: self.title,
            content: self.content,
        };
        note.validate()?;
        Ok(note)
    }
}

/// Request payload for updating a note.
///
/// A field missing from the payload keeps the stored value. `content` can be
/// cleared by sending an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Option<String>>,
}

impl UpdateNoteRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the note title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the note content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Some(content.into()));
        self
    }

    /// Clear the note content.
    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    /// Checks a supplied title. An absent title is valid.
    pub fn validate(&self) -> Result<(), NoteError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }

    /// Apply updates to an existing note.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_request() {
        let request = CreateNoteRequest::new("Buy milk").with_content("2%");

        assert_eq!(request.title, "Buy milk");
        assert_eq!(request.content.as_deref(), Some("2%"));
    }

    #[test]
    fn test_create_note_into_new_note() {
        let note = CreateNoteRequest::new("Buy milk").into_new_note().unwrap();

        assert_eq!(note, NewNote::new("Buy milk"));
    }

    #[test]
    fn test_create_note_into_new_note_rejects_empty_title() {
        let result = CreateNoteRequest::new("").into_new_note();

        assert_eq!(result, Err(NoteError::EmptyTitle));
    }

    #[test]
    fn test_create_note_request_content_is_optional() {
        let request: CreateNoteRequest = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();

        assert_eq!(request.title, "Buy milk");
        assert!(request.content.is_none());
    }

    #[test]
    fn test_update_note_apply() {
        let mut note = Note::new(1, "Buy milk").with_content("whole");

        UpdateNoteRequest::new()
            .with_title("Buy oat milk")
            .with_content("2%")
            .apply_to(&mut note);

        assert_eq!(note, Note::new(1, "Buy oat milk").with_content("2%"));
    }

    #[test]
    fn test_update_note_apply_keeps_absent_fields() {
        let mut note = Note::new(1, "Buy milk").with_content("whole");

        UpdateNoteRequest::new()
            .with_content("2%")
            .apply_to(&mut note);

        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.content.as_deref(), Some("2%"));
    }

    #[test]
    fn test_update_note_clear_content() {
        let mut note = Note::new(1, "Buy milk").with_content("whole");

        UpdateNoteRequest::new().clear_content().apply_to(&mut note);

        assert_eq!(note, Note::new(1, "Buy milk"));
    }

    #[test]
    fn test_update_note_request_null_content_clears() {
        let missing: UpdateNoteRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        let null: UpdateNoteRequest = serde_json::from_str(r#"{"content":null}"#).unwrap();

        assert_eq!(missing.content, None);
        assert_eq!(null, UpdateNoteRequest::new().clear_content());
    }

    #[test]
    fn test_update_note_validate() {
        assert!(UpdateNoteRequest::new().validate().is_ok());
        assert!(UpdateNoteRequest::new().with_title("ok").validate().is_ok());
        assert_eq!(
            UpdateNoteRequest::new().with_title("").validate(),
            Err(NoteError::EmptyTitle)
        );
    }
}
