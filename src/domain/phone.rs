//! Phone value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number stored exactly as entered.
///
/// Validation only checks the length (4 to 15 characters). There is no
/// character set restriction, so formatted and international numbers pass
/// through untouched. Two phones are equal when their number strings match.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("1234567").unwrap();
/// assert_eq!(phone.to_string(), "1234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(Field);

impl Phone {
    /// Create a new Phone, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is shorter than
    /// 4 or longer than 15 characters.
    pub fn new(number: impl Into<String>) -> Result<Self, ValidationError> {
        Field::new(FieldKind::Phone, number).map(Self)
    }

    /// Check a raw string without building a Phone.
    pub fn is_valid(candidate: &str) -> bool {
        FieldKind::Phone.is_valid(candidate)
    }

    /// Replace the number in place. The old number survives a rejected value.
    pub fn set(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        self.0.set(number)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
