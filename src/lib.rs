//! Users Desk - Main Library
//!
//! A form-driven desktop client for a remote `users` REST collection: view,
//! search, create, replace, merge and delete user records, with loading and
//! success/error feedback.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - User records and request bodies
//!   - Configuration types
//!   - Error types
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - `UserService` / `HttpUserService`: the remote users resource
//!   - `UsersStore`: the canonical collection, kept in step with the service
//!   - `SearchFilter`: the search term and its predicate
//!   - Views rendering the form, search box and user list
//!
//! - **`backend`** - Development users service (only with the `ssr` feature)
//!   - Axum server exposing `/users` over an in-memory table
//!
//! # Feature Flags
//!
//! - **`ssr`** - Compiles the development server and its binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use userdesk::egui_app::{Config, HttpUserService, UsersStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpUserService::new(Config::from_env()?)?;
//! let store = UsersStore::new(service);
//!
//! store.list().await;
//! let state = store.state();
//! if !state.error_message.is_empty() {
//!     eprintln!("{}", state.error_message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Store operations never fail: remote errors settle into `error_message`
//! - Form validation errors are returned as `SharedError` before any call
//! - Server errors are `backend::error::BackendError`, rendered as JSON

/// Shared types and data structures
pub mod shared;

/// Development users service
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
