//! Record model: one contact's name, phones and optional birthday.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction because it is the record's key in the
/// [`AddressBook`](super::AddressBook). Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with a birthday already set.
    pub fn with_birthday(name: Name, birthday: Birthday) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: Some(birthday),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &Phone) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if `old` is not on the record.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> BookResult<()> {
        let index = self.position_of(old)?;
        self.phones[index] = new;
        Ok(())
    }

    fn position_of(&self, phone: &Phone) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| {
                BookError::NotFound(format!("phone {} on contact {}", phone, self.name))
            })
    }

    /// Phones joined with `", "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line summary of the record.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Days from today until the next occurrence of `birthday`.
    pub fn days_until_next_birthday(&self, birthday: &Birthday) -> i64 {
        self.days_until_next_birthday_from(birthday, Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of `birthday`.
    ///
    /// The full (month, day) pair is compared, so a birthday earlier in the
    /// current month rolls over to next year. The result is never negative
    /// and is zero on the birthday itself.
    pub fn days_until_next_birthday_from(&self, birthday: &Birthday, today: NaiveDate) -> i64 {
        let mut next = birthday.occurrence_in(today.year());
        if next < today {
            next = birthday.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "None".to_string(),
        };
        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name,
            self.phones_joined(),
            birthday
        )
    }
}
