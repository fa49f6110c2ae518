// Note repository seam
// Handlers depend on this trait rather than on the PostgreSQL pool directly

use async_trait::async_trait;

use crate::{error::ApiError, models::Note};

/// Persistence operations over the `notes` table.
///
/// Each method maps to exactly one SQL statement in the PostgreSQL
/// implementation; nothing spans a transaction.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note and return it with its generated id.
    async fn create(&self, title: &str, content: &str) -> Result<Note, ApiError>;

    /// All notes in storage order. An empty table yields an empty `Vec`.
    async fn list_all(&self) -> Result<Vec<Note>, ApiError>;

    /// Fails with [`ApiError::NotFound`] when no row has this id.
    async fn get_by_id(&self, id: i32) -> Result<Note, ApiError>;

    /// Overwrite title and content. Fails with [`ApiError::NotFound`] when no
    /// row has this id.
    async fn update(&self, id: i32, title: &str, content: &str) -> Result<(), ApiError>;

    /// Remove the note. Deleting an id that does not exist succeeds.
    async fn delete(&self, id: i32) -> Result<(), ApiError>;
}
