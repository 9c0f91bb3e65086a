//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Categorized failures returned by the address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// The referenced contact (or its birthday) does not exist
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Malformed or out-of-range input
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// A command was given the wrong number of arguments
    #[error("Missing arguments: {0}")]
    MissingArgs(String),
}

impl BookError {
    /// The line shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Error: Contact not found.".to_string(),
            Self::Invalid(_) => "Error: Invalid input. Please enter name and phone number. \
                                 Check the date of birth. Check parameters."
                .to_string(),
            Self::MissingArgs(hint) => format!("Error: {}", hint),
        }
    }

    /// Short category name, used as a structured log field.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Invalid(_) => "invalid",
            Self::MissingArgs(_) => "missing_args",
        }
    }
}

impl From<ValidationError> for BookError {
    fn from(err: ValidationError) -> Self {
        BookError::Invalid(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
