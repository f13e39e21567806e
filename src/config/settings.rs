//! Application settings loaded from `config.toml`.
//!
//! Every section is optional; a missing file yields the built-in defaults. The database
//! URL can be overridden afterwards by the `--database-url` flag or `DATABASE_URL`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Database URL used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://ticket_center.sqlite?mode=rwc";

/// How many invalid entries of a single field the console accepts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Connection settings
    pub database: DatabaseSettings,
    /// Console prompt behavior
    pub console: ConsoleSettings,
}

/// `[database]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseSettings {
    /// sea-orm connection URL (`sqlite://...` or `postgres://...`)
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

/// `[console]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Invalid entries of one field allowed before the operation is aborted
    pub max_attempts: u32,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Replaces the database URL when an override is present.
    #[must_use]
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database.url = url;
        }
        self
    }

    /// Rejects settings the application cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(Error::Config {
                message: "database.url cannot be empty".to_string(),
            });
        }
        if self.console.max_attempts == 0 {
            return Err(Error::Config {
                message: "console.max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })
}

/// Loads settings from a TOML file, falling back to defaults when it does not exist.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(?path, "No settings file found, using defaults.");
        return Ok(Settings::default());
    }

    debug!(?path, "Loading settings.");
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {}: {e}", path.display()),
    })?;
    parse_settings(&contents)
}
