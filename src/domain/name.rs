//! Name value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact name made only of alphabetic characters.
///
/// Names double as address book keys, so they are never mutated once a
/// record has been built around them.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// assert!(Name::new("John2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(Field);

impl Name {
    /// Create a new Name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` for empty, whitespace-only or
    /// non-alphabetic input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Field::new(FieldKind::Name, name).map(Self)
    }

    /// Check a raw string without building a Name.
    pub fn is_valid(candidate: &str) -> bool {
        FieldKind::Name.is_valid(candidate)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(name.to_string(), "Alice");
    }

    #[test]
    fn test_name_rejects_whitespace_digits_and_punctuation() {
        assert!(Name::new("  ").is_err());
        assert!(Name::new("Al1ce").is_err());
        assert!(Name::new("Alice!").is_err());
        assert!(Name::new(" Alice").is_err());
    }

    #[test]
    fn test_name_is_valid_matches_new() {
        for candidate in ["Alice", "Zoë", "", "Al1ce", "Mary Jane"] {
            assert_eq!(Name::is_valid(candidate), Name::new(candidate).is_ok());
        }
        assert!(!Name::is_valid("\u{FFFD}\u{FFFD}"));
    }

    #[test]
    fn test_name_deserialization_invalid_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"R2D2\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Alice\"");
    }
}
