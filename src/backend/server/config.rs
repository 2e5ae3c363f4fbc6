/**
 * Server Configuration
 *
 * Loads the development server settings from environment variables, with
 * defaults suited to running next to the desktop client.
 *
 * # Variables
 *
 * - `USERDESK_SERVER_PORT` - listen port (default 5000)
 * - `USERDESK_SEED` - optional JSON file holding an array of users
 *
 * # Error Handling
 *
 * A bad port or an unreadable seed file is logged and replaced by the
 * default; the server still starts.
 */

use std::path::{Path, PathBuf};

use crate::shared::{SharedError, User};

/// Default listen port, matching the client's default URL
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = match std::env::var("USERDESK_SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!(%raw, error = %e, "invalid USERDESK_SERVER_PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let seed_path = std::env::var_os("USERDESK_SEED").map(PathBuf::from);
        Self { port, seed_path }
    }
}

/// Parse a JSON array of users
pub fn parse_seed(raw: &str) -> Result<Vec<User>, SharedError> {
    Ok(serde_json::from_str(raw)?)
}

/// Load the seed file, or nothing when it is missing or malformed.
pub async fn load_seed(path: &Path) -> Vec<User> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read seed file, starting empty");
            return Vec::new();
        }
    };
    match parse_seed(&raw) {
        Ok(users) => {
            tracing::info!(count = users.len(), "seed users loaded");
            users
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid seed file, starting empty");
            Vec::new()
        }
    }
}
