// Handlers module
// HTTP handlers for the REST API

pub mod notes;

pub use notes::{create_note, delete_note, list_notes, update_note, NoteState};
