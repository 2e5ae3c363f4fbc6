/**
 * Backend Error Types
 *
 * Errors raised by the users resource handlers. Every variant maps to an
 * HTTP status code and can be returned straight from a handler.
 *
 * # Error Types
 *
 * - `HandlerError` - A request the handler cannot serve, with its status
 * - `NotFound` - No user with the requested id
 * - `IdsExhausted` - No numeric id is left to assign
 * - `SharedError` - Validation failures from the shared module
 */

use thiserror::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use userdesk::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::not_found("42");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., an unreadable request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The requested user does not exist
    #[error("User not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// The largest id is already `u64::MAX`
    #[error("No user ids left to assign")]
    IdsExhausted,

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error for `id`
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `IdsExhausted` - 500 Internal Server Error
    /// - `SharedError` - 400 for validation, 500 for serialization
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

/// A body axum could not read as JSON keeps axum's status and text.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}
