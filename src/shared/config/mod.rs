//! Application configuration module
//!
//! Provides the transport settings shared by the client and its tests.

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the users service
    pub server_url: Option<Url>,
    /// Upper bound for a single HTTP request; unbounded when unset
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Bound every request by `timeout`
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url.as_deref().map(parse_server_url).transpose()?,
            request_timeout: self.request_timeout,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse a users service base URL.
///
/// Only `http`/`https` URLs with a host are accepted.
pub fn parse_server_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let invalid = || ConfigError::InvalidUrl(raw.to_string());

    let url = Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    if !url.host_str().is_some_and(|host| !host.is_empty()) {
        return Err(invalid());
    }
    Ok(url)
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}
