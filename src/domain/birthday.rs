//! Birthday value object.

use super::errors::ValidationError;
use super::field::{parse_birthday, Field, FieldKind};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A calendar birthday entered as `dd-mm-yyyy`.
///
/// The raw text is kept for rendering, so `"5-06-1990"` prints back as
/// `"5-06-1990"`. The parsed date drives the countdown arithmetic.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15-06-1990").unwrap();
/// assert_eq!(birthday.day(), 15);
/// assert_eq!(birthday.month(), 6);
/// assert_eq!(birthday.year(), 1990);
/// assert!(Birthday::new("31-06-1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    field: Field,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from a `dd-mm-yyyy` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the string is not a
    /// real calendar date in that format.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let field = Field::new(FieldKind::Birthday, raw)?;
        let date = parse_birthday(field.value())
            .ok_or_else(|| ValidationError::InvalidBirthday(field.value().to_string()))?;
        Ok(Self { field, date })
    }

    /// Check a raw string without building a Birthday.
    pub fn is_valid(candidate: &str) -> bool {
        FieldKind::Birthday.is_valid(candidate)
    }

    /// Reject birthdays whose year is after `today`'s year.
    pub fn ensure_not_future(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.year() > today.year() {
            return Err(ValidationError::FutureBirthday(self.to_string()));
        }
        Ok(())
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The date this birthday is celebrated in `year`.
    ///
    /// February 29 falls back to February 28 in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month(), self.day() - 1))
            .unwrap_or(self.date)
    }

    /// Get the birthday as entered.
    pub fn as_str(&self) -> &str {
        self.field.value()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)
    }
}
