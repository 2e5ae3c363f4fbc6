use std::time::Duration;

use url::Url;

use crate::shared::config::{parse_server_url, AppConfig, AppConfigBuilder, ConfigError};

/// Default users service URL
const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Environment variable overriding the users service URL
pub const SERVER_URL_ENV: &str = "USERDESK_API_URL";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    base: Url,
}

impl Config {
    /// Configuration for the built-in default URL
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder())
    }

    /// Read `USERDESK_API_URL`, falling back to the default URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SERVER_URL_ENV) {
            Ok(url) => Self::with_builder(AppConfig::builder().server_url(url)),
            Err(_) => Self::new(),
        }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        let base = match &app.server_url {
            Some(url) => url.clone(),
            None => parse_server_url(DEFAULT_SERVER_URL)?,
        };
        Ok(Self { app, base })
    }

    pub fn server_url(&self) -> &str {
        self.base.as_str()
    }

    /// Per-request timeout, if one was configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.app.request_timeout
    }

    /// URL of the users collection
    pub fn users_url(&self) -> Url {
        self.resource_url(&[])
    }

    /// URL of a single user, with the id escaped as one path segment
    pub fn user_url(&self, id: &str) -> Url {
        self.resource_url(&[id])
    }

    fn resource_url(&self, tail: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // always Ok: `parse_server_url` only accepts base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").extend(tail);
        }
        url
    }
}
