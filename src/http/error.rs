//! HTTP error handling and response types.
//!
//! Failures are signaled by status alone: 404 for an unknown id, 400 for a
//! missing or empty payload. Error responses carry no body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::repository::RepositoryError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound,
    /// Invalid request payload
    BadRequest,
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Internal(message) => {
                tracing::error!("internal error: {}", message);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => AppError::NotFound,
            RepositoryError::ValidationError { .. } => AppError::BadRequest,
            RepositoryError::InternalError { message } => AppError::Internal(message),
        }
    }
}
