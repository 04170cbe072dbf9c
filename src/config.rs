//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Default location of the saved contact book.
pub const DEFAULT_CONTACTS_FILE: &str = "./data/contacts.json";

/// Environment variable naming the contact book file.
pub const CONTACTS_FILE_VAR: &str = "CONTACT_BOOK_FILE";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file with saved contacts (default: ./data/contacts.json)
    pub contacts_file: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path to the contacts JSON file (default: ./data/contacts.json)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_with_file(None)
    }

    /// Like `from_env`, but an explicit `file` (e.g. from `--file`) takes the
    /// place of `CONTACT_BOOK_FILE`, which is then neither read nor validated.
    pub fn from_env_with_file(file: Option<PathBuf>) -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let contacts_file = match file {
            Some(path) => {
                Self::validate_contacts_file("--file", &path)?;
                path
            }
            None => {
                let path = env::var(CONTACTS_FILE_VAR)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTACTS_FILE));
                Self::validate_contacts_file(CONTACTS_FILE_VAR, &path)?;
                path
            }
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contacts_file,
            log_level,
        })
    }

    /// The contacts file must be named and must be a `.json` file.
    fn validate_contacts_file(var: &str, path: &Path) -> ConfigResult<()> {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: "File name is not specified (empty)".to_string(),
            });
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: format!("File {} is not a JSON file", path.display()),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_level: "error".to_string(),
        }
    }
}
