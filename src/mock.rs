// In-memory NoteRepository for handler tests
// Enabled for this crate's tests, or for other crates through the `test-utils` feature

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{error::ApiError, models::Note, repository::NoteRepository};

#[derive(Default)]
struct MockState {
    notes: BTreeMap<i32, Note>,
    last_id: i32,
}

#[derive(Clone, Default)]
pub struct MockNoteRepository {
    state: Arc<Mutex<MockState>>,
    fail_with: Option<String>,
}

impl MockNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a storage error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Snapshot of the stored notes in id order.
    pub fn notes(&self) -> Vec<Note> {
        self.state.lock().unwrap().notes.values().cloned().collect()
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match &self.fail_with {
            Some(message) => Err(ApiError::storage(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn create(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        self.check_failure()?;
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let note = Note {
            id: state.last_id,
            title: title.to_string(),
            content: content.to_string(),
        };
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn list_all(&self) -> Result<Vec<Note>, ApiError> {
        self.check_failure()?;
        Ok(self.notes())
    }

    async fn get_by_id(&self, id: i32) -> Result<Note, ApiError> {
        self.check_failure()?;
        self.state
            .lock()
            .unwrap()
            .notes
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::note_not_found(id))
    }

    async fn update(&self, id: i32, title: &str, content: &str) -> Result<(), ApiError> {
        self.check_failure()?;
        let mut state = self.state.lock().unwrap();
        match state.notes.get_mut(&id) {
            Some(note) => {
                note.title = title.to_string();
                note.content = content.to_string();
                Ok(())
            }
            None => Err(ApiError::note_not_found(id)),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.check_failure()?;
        self.state.lock().unwrap().notes.remove(&id);
        Ok(())
    }
}
