//! Shared Error Types
//!
//! This module defines error types that are shared between the client and the
//! development server.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A user form is missing a required attribute
//!
//! # Usage
//!
//! ```rust
//! use userdesk::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "email is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field, for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
