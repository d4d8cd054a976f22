//! Contact Assistant - a command-line personal contact manager.
//!
//! Stores names, phone numbers, and birthdays, supports add/edit/lookup
//! operations, computes upcoming-birthday reminders with weekend shifting,
//! and persists the book to disk between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, and birthdays
//! - **models**: The Record and AddressBook data model
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **commands**: Handlers translating tokenized input into book operations
//! - **storage**: Whole-book JSON persistence
//! - **repl**: The interactive command loop

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
