use axum::{routing::get, Router};

use crate::{
    handlers::{create_note, delete_note, list_notes, update_note, NoteState},
    middleware::create_middleware_stack,
};

/// Create the Axum router with all endpoints and middleware
pub fn create_router(repo: NoteState) -> Router {
    Router::new()
        .route("/", get(list_notes).post(create_note))
        .route("/:id", axum::routing::put(update_note).delete(delete_note))
        .with_state(repo)
        .layer(create_middleware_stack())
}
