// Library root for the notes API

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod models;
pub mod repository;
pub mod router;

// Re-export commonly used types
pub use db::Database;
pub use error::{ApiError, ApiResult};
pub use models::{Note, NoteRequest};
pub use repository::NoteRepository;
pub use router::create_router;
