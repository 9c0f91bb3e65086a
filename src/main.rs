//! Contact Book - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_book::{Config, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    session.run().context("Session I/O failed")?;

    info!("Contact Book shutdown complete");
    Ok(())
}
