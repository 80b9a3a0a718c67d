//! Contact Assistant - Main entry point
//!
//! Boots the assistant: logging, configuration, storage, then the
//! interactive command loop on stdin/stdout.

use anyhow::Result;
use contact_assistant::{Assistant, Config, Directory, JsonFileStore, Repl};
use std::num::NonZeroUsize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr; stdout belongs to the interactive session.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.storage_path.display(), "starting contact assistant");

    let store = JsonFileStore::new(&config.storage_path);
    let directory = match Directory::load(Box::new(store)) {
        Ok(directory) => directory,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };
    info!(contacts = directory.len(), "address book loaded");

    let chunk_size = NonZeroUsize::new(config.chunk_size)
        .ok_or_else(|| anyhow::anyhow!("chunk size must be at least 1"))?;
    let assistant = Assistant::new(directory, chunk_size);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut repl = Repl::new(assistant);
    repl.run(stdin.lock(), stdout.lock())?;

    info!("contact assistant shutdown complete");
    Ok(())
}
