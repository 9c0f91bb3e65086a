//! Validated field holder shared by every contact value object.
//!
//! A [`Field`] pairs a raw string with the [`FieldKind`] that decides whether
//! the string is acceptable and how it is rendered. Assignment is atomic: a
//! rejected value leaves the previously stored one in place.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Shape of a birthday string: day, month and a four digit year.
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").expect("Failed to compile birthday regex")
});

/// Shortest phone number accepted, in characters.
pub const MIN_PHONE_LEN: usize = 4;

/// Longest phone number accepted, in characters.
pub const MAX_PHONE_LEN: usize = 15;

/// The closed set of field types a contact record is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Contact name, also the address book key
    Name,
    /// Phone number, checked by length only
    Phone,
    /// Birthday in `dd-mm-yyyy` form
    Birthday,
}

impl FieldKind {
    /// Check a raw candidate against this kind's validity predicate.
    ///
    /// Pure and independent of any stored value.
    pub fn is_valid(&self, candidate: &str) -> bool {
        match self {
            Self::Name => {
                !candidate.trim().is_empty() && candidate.chars().all(char::is_alphabetic)
            }
            Self::Phone => {
                let len = candidate.chars().count();
                (MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&len)
            }
            Self::Birthday => parse_birthday(candidate).is_some(),
        }
    }

    /// Validate a candidate, producing the matching [`ValidationError`] on failure.
    pub fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        if self.is_valid(candidate) {
            return Ok(());
        }

        let raw = candidate.to_string();
        Err(match self {
            Self::Name => ValidationError::InvalidName(raw),
            Self::Phone => ValidationError::InvalidPhone(raw),
            Self::Birthday => ValidationError::InvalidBirthday(raw),
        })
    }

    /// Render a stored value in this kind's natural string form.
    ///
    /// Every kind currently renders the value exactly as it was entered.
    pub fn render(&self, value: &str) -> String {
        match self {
            Self::Name | Self::Phone | Self::Birthday => value.to_string(),
        }
    }
}

/// Parse a `dd-mm-yyyy` string under strict calendar rules.
///
/// Returns `None` for malformed strings, for impossible dates such as
/// `30-02-2020` or `01-13-2020`, and for year `0000`.
pub fn parse_birthday(raw: &str) -> Option<NaiveDate> {
    let caps = BIRTHDAY_RE.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// A validated scalar value tagged with its [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    kind: FieldKind,
    value: String,
}

impl Field {
    /// Create a field, validating the initial value.
    ///
    /// # Errors
    ///
    /// Returns the kind's [`ValidationError`] if `value` fails its predicate.
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        kind.validate(&value)?;
        Ok(Self { kind, value })
    }

    /// Replace the stored value.
    ///
    /// On failure the previous value is kept untouched.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        self.kind.validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Get the stored raw value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.render(&self.value))
    }
}
