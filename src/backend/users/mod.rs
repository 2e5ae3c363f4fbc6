//! Users Resource
//!
//! An in-memory stand-in for the remote `users` service the desktop client
//! talks to.

/// Ordered in-memory storage
pub mod table;

/// Axum handlers
pub mod handlers;

pub use table::UserTable;
