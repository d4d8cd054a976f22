//! Contact Assistant - Main entry point
//!
//! Loads the address book from disk, runs the interactive command loop on
//! stdin/stdout, and saves the book back on exit.

use anyhow::Result;
use contact_assistant::{repl, storage, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Load the address book; a missing data file yields an empty book
    let mut book = storage::load_book(&config.data_file)?;
    info!(
        "Loaded {} contact(s) from {}",
        book.len(),
        config.data_file.display()
    );

    let stdin = io::stdin();
    repl::run(stdin.lock(), io::stdout(), &mut book)?;

    storage::save_book(&config.data_file, &book)?;
    info!(
        "Saved {} contact(s) to {}",
        book.len(),
        config.data_file.display()
    );

    Ok(())
}
