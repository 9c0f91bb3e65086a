//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or contains non-alphabetic characters.
    InvalidName(String),

    /// The provided phone number has an unacceptable length.
    InvalidPhone(String),

    /// The provided birthday is not a real `dd-mm-yyyy` calendar date.
    InvalidBirthday(String),

    /// The provided birthday lies in a year after the current one.
    FutureBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid name: {:?}", name),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {:?}", phone),
            Self::InvalidBirthday(date) => write!(f, "Invalid birthday: {:?}", date),
            Self::FutureBirthday(date) => write!(f, "Birthday is in the future: {}", date),
        }
    }
}

impl std::error::Error for ValidationError {}
