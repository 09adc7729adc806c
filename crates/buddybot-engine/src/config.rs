//! Configuration for the BuddyBot client.
//!
//! Stored as JSON; every field has a default so partial files are valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user directory under the platform config dir.
pub const APP_DIR: &str = "buddybot";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL of the chat endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name the bot uses for itself in local messages.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Currency prefix used when asking for a budget list.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Request timeout in seconds. Unset means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/chat".into()
}

fn default_bot_name() -> String {
    "BuddyBot".into()
}

fn default_currency_symbol() -> String {
    "₹".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            bot_name: default_bot_name(),
            currency_symbol: default_currency_symbol(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Default location: `<config_dir>/buddybot/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
