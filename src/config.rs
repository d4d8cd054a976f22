//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, with `.env` files honored when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book data file.
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book JSON file
    pub data_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_DATA_FILE`: Path of the address book file (default: `addressbook.json`)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ASSISTANT_DATA_FILE") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ASSISTANT_DATA_FILE".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        Ok(Config { data_file })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}
