use serde::{Deserialize, Serialize};

use super::{operations::validate_title, NoteError};

/// Store-assigned note identifier.
pub type NoteId = i64;

/// A persisted note.
///
/// The `id` is assigned by the durable store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: Option<String>,
}

impl Note {
    /// Creates a note with a known id and no content.
    pub fn new(id: NoteId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: None,
        }
    }

    /// Sets the content for this note.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A note that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: Option<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Checks the title rule. Stores never re-check it.
    pub fn validate(&self) -> Result<(), NoteError> {
        validate_title(&self.title)
    }

    /// Attaches the id assigned by the store.
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
        }
    }
}
