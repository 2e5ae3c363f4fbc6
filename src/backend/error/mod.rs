//! Backend Error Module
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` for returning errors from handlers

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
