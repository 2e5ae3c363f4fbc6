//! Server Module
//!
//! - **`init`** - Application assembly
//! - **`state`** - Shared handler state
//! - **`config`** - Environment configuration and seed loading

pub mod config;
pub mod init;
pub mod state;

pub use init::{create_app, create_app_with_config};
pub use state::AppState;
