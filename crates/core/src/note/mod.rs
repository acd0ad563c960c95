mod error;
mod operations;
mod requests;
mod types;

pub use error::NoteError;
pub use operations::validate_title;
pub use requests::{CreateNoteRequest, UpdateNoteRequest};
pub use types::{NewNote, Note, NoteId};
