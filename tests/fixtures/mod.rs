//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use contact_book::operations::add_contact;
use contact_book::AddressBook;

/// Build a book from `(name, phone)` pairs, in order.
#[allow(dead_code)]
pub fn book_with(contacts: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, phone) in contacts {
        add_contact(&mut book, name, phone).expect("fixture contact should be valid");
    }
    book
}

/// A fixed calendar date.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date should be valid")
}
