//! Birthday operations.

use super::log_rejection;
use crate::domain::{Birthday, Name};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Set or replace a contact's birthday, creating the contact if needed.
///
/// # Errors
///
/// `BookError::Invalid` if the name is invalid, the date is not a real
/// `dd-mm-yyyy` date, or its year is after the current year.
pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> BookResult<String> {
    add_birthday_on(book, name, birthday, Local::now().date_naive())
}

/// [`add_birthday`] with an explicit current date.
pub fn add_birthday_on(
    book: &mut AddressBook,
    name: &str,
    birthday: &str,
    today: NaiveDate,
) -> BookResult<String> {
    store_birthday(book, name, birthday, today)
        .inspect_err(|e| log_rejection("add_birthday", e))
}

fn store_birthday(
    book: &mut AddressBook,
    name: &str,
    birthday: &str,
    today: NaiveDate,
) -> BookResult<String> {
    let the_name = Name::new(name)?;
    let the_birthday = Birthday::new(birthday)?;
    the_birthday.ensure_not_future(today)?;

    match book.get_mut(name) {
        Some(record) => record.set_birthday(the_birthday),
        None => book.add_record(Record::with_birthday(the_name, the_birthday)),
    }

    debug!(contact = name, birthday, "Birthday set");
    Ok(format!(
        "Contact '{}' with birthday '{}' has been added.",
        name, birthday
    ))
}

/// Days until a contact's next birthday.
///
/// # Errors
///
/// `BookError::NotFound` if the contact does not exist or has no birthday.
pub fn happy_birthday(book: &AddressBook, name: &str) -> BookResult<i64> {
    happy_birthday_on(book, name, Local::now().date_naive())
}

/// [`happy_birthday`] with an explicit current date.
pub fn happy_birthday_on(book: &AddressBook, name: &str, today: NaiveDate) -> BookResult<i64> {
    let record = book
        .get(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
        .inspect_err(|e| log_rejection("happy_birthday", e))?;

    let birthday = record
        .birthday()
        .ok_or_else(|| BookError::NotFound(format!("birthday of {}", name)))
        .inspect_err(|e| log_rejection("happy_birthday", e))?;

    Ok(record.days_until_next_birthday_from(birthday, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{add_contact, get_phone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_birthday_creates_record() {
        let mut book = AddressBook::new();
        let today = date(2024, 1, 1);
        let msg = add_birthday_on(&mut book, "John", "15-06-1990", today).unwrap();
        assert_eq!(msg, "Contact 'John' with birthday '15-06-1990' has been added.");
        assert_eq!(happy_birthday_on(&book, "John", today), Ok(166));
        assert_eq!(get_phone(&book, "John").unwrap(), "Phone numbers for John: ");
    }

    #[test]
    fn test_add_birthday_replaces_on_existing_record() {
        let mut book = AddressBook::new();
        let today = date(2024, 6, 1);
        add_contact(&mut book, "John", "1234567").unwrap();
        add_birthday_on(&mut book, "John", "20-06-1990", today).unwrap();
        add_birthday_on(&mut book, "John", "10-06-1990", today).unwrap();

        assert_eq!(happy_birthday_on(&book, "John", today), Ok(9));
        assert_eq!(
            get_phone(&book, "John").unwrap(),
            "Phone numbers for John: 1234567"
        );
    }

    #[test]
    fn test_add_birthday_rejects_bad_input() {
        let mut book = AddressBook::new();
        let today = date(2024, 6, 1);
        for (name, birthday) in [
            ("John", "31-06-1990"),
            ("John", "1990-06-15"),
            ("John", "15-06-2025"),
            ("John", "01-01-0000"),
            ("J0hn", "15-06-1990"),
        ] {
            assert!(
                matches!(
                    add_birthday_on(&mut book, name, birthday, today),
                    Err(BookError::Invalid(_))
                ),
                "{} {} should be rejected",
                name,
                birthday
            );
        }
        assert!(book.is_empty());
    }

    #[test]
    fn test_birthday_later_in_current_year_is_allowed() {
        let mut book = AddressBook::new();
        let today = date(2024, 6, 1);
        assert!(add_birthday_on(&mut book, "Baby", "30-12-2024", today).is_ok());
    }

    #[test]
    fn test_happy_birthday_not_found() {
        let mut book = AddressBook::new();
        let today = date(2024, 6, 1);
        assert!(matches!(
            happy_birthday_on(&book, "John", today),
            Err(BookError::NotFound(_))
        ));

        add_contact(&mut book, "John", "1234567").unwrap();
        assert!(matches!(
            happy_birthday_on(&book, "John", today),
            Err(BookError::NotFound(_))
        ));
    }

    #[test]
    fn test_happy_birthday_never_negative() {
        let mut book = AddressBook::new();
        let today = date(2024, 6, 20);
        add_birthday_on(&mut book, "John", "10-06-1990", today).unwrap();
        assert_eq!(happy_birthday_on(&book, "John", today), Ok(355));
    }
}
