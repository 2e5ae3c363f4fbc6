//! Shared Module
//!
//! Types shared between the desktop client and the development users service.
//! Everything here is platform-agnostic and serializable.

/// User records and request bodies
pub mod user;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use user::{NewUser, User, UserAttributes, UserPartial, UserPatch};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
