// Note handlers
// HTTP handlers for note CRUD operations

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    error::ApiError,
    models::{DataResponse, MessageDataResponse, MessageResponse, NoteRequest},
    repository::NoteRepository,
};

pub type NoteState = Arc<dyn NoteRepository>;

pub const CREATED_MESSAGE: &str = "Note created successfully";
pub const UPDATED_MESSAGE: &str = "Note updated successfully";
pub const DELETED_MESSAGE: &str = "Note deleted successfully";

/// List every note
/// GET /
pub async fn list_notes(State(repo): State<NoteState>) -> Result<impl IntoResponse, ApiError> {
    let notes = repo.list_all().await?;

    info!("Retrieved {} notes", notes.len());
    Ok((StatusCode::OK, Json(DataResponse::new(notes))))
}

/// Create a note
/// POST /
pub async fn create_note(
    State(repo): State<NoteState>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let note = repo.create(&request.title, &request.content).await?;

    info!("Successfully created note with id: {}", note.id);
    Ok((
        StatusCode::OK,
        Json(MessageDataResponse::new(CREATED_MESSAGE, note)),
    ))
}

/// Overwrite a note's title and content, then return the stored row
/// PUT /:id
pub async fn update_note(
    State(repo): State<NoteState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // Body errors take precedence over a bad id
    let Json(request) = payload?;
    let Path(id) = id?;
    info!("Updating note with id: {}", id);

    repo.update(id, &request.title, &request.content).await?;
    let note = repo.get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDataResponse::new(UPDATED_MESSAGE, note)),
    ))
}

/// Delete a note; an id that matches nothing still succeeds
/// DELETE /:id
pub async fn delete_note(
    State(repo): State<NoteState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    info!("Deleting note with id: {}", id);

    repo.delete(id).await?;

    Ok((StatusCode::OK, Json(MessageResponse::new(DELETED_MESSAGE))))
}
