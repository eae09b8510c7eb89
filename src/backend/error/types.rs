/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Database Errors
 *
 * Anything `sqlx` reports: an unreachable server, a closed pool, a missing
 * table. These always map to 500 and are never retried.
 *
 * ## Validation Errors
 *
 * Missing fields arrive as `SharedError::MissingFields` and map to 400.
 *
 * ## Template Errors
 *
 * The embedded feed page failed to compile or render; 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use souvenir::backend::error::BackendError;
/// use souvenir::shared::SharedError;
/// use axum::http::StatusCode;
///
/// let err: BackendError = SharedError::missing_fields(vec!["prenom".to_string()]).into();
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Failure reported by the persistence backend
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failure compiling or rendering a template
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Validation error from the shared module
    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Shared(MissingFields)` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Shared(SharedError::MissingFields { .. }) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body
    pub fn message(&self) -> String {
        match self {
            Self::Database(err) => err.to_string(),
            Self::Template(err) => err.to_string(),
            Self::Shared(err) => err.to_string(),
        }
    }
}
