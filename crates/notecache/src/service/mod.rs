//! Business rules on top of a [`NoteRepository`](notecache_core::storage::NoteRepository).

mod error;
mod notes;

pub use error::{service_error_to_status_code, ServiceError};
pub use notes::NoteService;
