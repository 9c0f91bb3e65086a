//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing::level_filters::LevelFilter;

/// Prompt printed before each command when none is configured.
pub const DEFAULT_PROMPT: &str = "Write command \t";

/// Configuration for the contact book shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt shown before reading each command
    pub prompt: String,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: Input prompt (default: `"Write command \t"`)
    /// - `LOG_LEVEL`: One of off, error, warn, info, debug, trace (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Config::default();

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        if log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be a log level name, got: {}", log_level),
            });
        }

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
