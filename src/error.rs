use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tokio_postgres::error::SqlState;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request body or path parameter
    #[error("Invalid request: {0}")]
    Binding(String),

    /// Lookup or update matched no row
    #[error("{0}")]
    NotFound(String),

    /// Connection, driver or constraint failure
    #[error("Database error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn binding(message: impl Into<String>) -> Self {
        Self::Binding(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn note_not_found(id: i32) -> Self {
        Self::NotFound(format!("Note with id {} not found", id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Binding(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Binding(ref message) => tracing::debug!("Request binding failed: {}", message),
            ApiError::NotFound(ref message) => tracing::debug!("Resource not found: {}", message),
            // Driver details were already logged where the error was mapped
            ApiError::Storage(ref message) => tracing::warn!("Storage error: {}", message),
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Binding(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Binding(rejection.body_text())
    }
}

// PostgreSQL error mapping
impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        if err.is_closed() {
            tracing::error!("PostgreSQL connection closed: {}", err);
            return ApiError::Storage("Database connection unavailable".to_string());
        }

        let message = match err.code() {
            Some(code) if *code == SqlState::UNIQUE_VIOLATION => "Note already exists",
            Some(code)
                if *code == SqlState::NOT_NULL_VIOLATION
                    || *code == SqlState::CHECK_VIOLATION
                    || *code == SqlState::STRING_DATA_RIGHT_TRUNCATION =>
            {
                "Note violates a table constraint"
            }
            Some(code) if *code == SqlState::UNDEFINED_TABLE => "Notes table does not exist",
            Some(code)
                if *code == SqlState::CONNECTION_EXCEPTION
                    || *code == SqlState::CONNECTION_DOES_NOT_EXIST
                    || *code == SqlState::CONNECTION_FAILURE
                    || *code == SqlState::ADMIN_SHUTDOWN =>
            {
                "Database connection unavailable"
            }
            Some(code) if *code == SqlState::INSUFFICIENT_PRIVILEGE => "Database access denied",
            _ => "Database operation failed",
        };

        tracing::error!("PostgreSQL error: {} (code: {:?})", err, err.code());
        ApiError::Storage(message.to_string())
    }
}

// Connection pool error mapping
impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        match err {
            deadpool_postgres::PoolError::Backend(err) => ApiError::from(err),
            deadpool_postgres::PoolError::Timeout(_) => {
                tracing::warn!("Database connection pool timeout: {}", err);
                ApiError::Storage("Database connection timeout".to_string())
            }
            deadpool_postgres::PoolError::Closed => {
                tracing::error!("Database connection pool is closed");
                ApiError::Storage("Database service unavailable".to_string())
            }
            _ => {
                tracing::error!("Database connection pool error: {}", err);
                ApiError::Storage("Database connection unavailable".to_string())
            }
        }
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;
