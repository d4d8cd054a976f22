//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// Every operation fails fast and leaves the address book unchanged; the
/// REPL turns these into user-facing messages.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact with the given name exists
    #[error("No contact with name '{0}' found")]
    ContactNotFound(String),

    /// The record has no phone with the given value
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// The command was given too few arguments
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("Data file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file contents could not be (de)serialized
    #[error("Data file parse error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
