//! Common test utilities and helpers
//!
//! - A scripted in-memory users service
//! - Sample users
//! - Assertions over store state

pub mod fixtures;
pub mod scripted_service;

// Re-export commonly used utilities
pub use fixtures::*;
pub use scripted_service::{Call, ScriptedService};
