//! Backend Module
//!
//! A development `users` service: the REST resource the desktop client
//! synchronises with, kept in memory.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route assembly
//! - **`users`** - The users table and its handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Server entry point (binary)
//! ├── server/     - Server initialization and state
//! ├── routes/     - Route configuration
//! ├── users/      - Users table and handlers
//! └── error/      - Error types
//! ```

pub mod error;
pub mod routes;
pub mod server;
pub mod users;
