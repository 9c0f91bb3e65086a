//! Contact Book - an interactive, in-memory contact directory.
//!
//! Contacts are keyed by name and carry any number of phone numbers plus an
//! optional birthday. Everything is driven by a line-oriented shell.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **operations**: Validate-then-mutate operations over the book
//! - **shell**: Command table and the read-eval-print session
//! - **error**: Categorized error types
//! - **config**: Configuration from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod operations;
pub mod shell;

pub use config::Config;
pub use domain::{Birthday, Field, FieldKind, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, Record};
pub use shell::Session;
