// Models module

pub mod envelope;
pub mod note;

// Re-export commonly used types
pub use envelope::{DataResponse, ErrorResponse, MessageDataResponse, MessageResponse};
pub use note::{Note, NoteRequest};
