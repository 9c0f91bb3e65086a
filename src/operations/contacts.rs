//! Phone-level contact operations.
//!
//! Each function validates its raw arguments, touches the book and returns
//! the message shown to the user.

use crate::domain::{Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use super::log_rejection;
use tracing::debug;

/// Add a phone to a contact, creating the contact if needed.
///
/// # Errors
///
/// `BookError::Invalid` if the name or phone fails validation.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    insert_phone(book, name, phone).inspect_err(|e| log_rejection("add_contact", e))
}

fn insert_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    let the_name = Name::new(name)?;
    let the_phone = Phone::new(phone)?;

    match book.get_mut(name) {
        Some(record) => record.add_phone(the_phone),
        None => {
            let mut record = Record::new(the_name);
            record.add_phone(the_phone);
            book.add_record(record);
        }
    }

    debug!(contact = name, phone, "Phone added");
    Ok(format!(
        "Contact '{}' with phone '{}' has been added.",
        name, phone
    ))
}

/// Replace one of a contact's phones.
///
/// # Errors
///
/// - `BookError::NotFound` if the contact does not exist
/// - `BookError::Invalid` if the new phone is invalid or the old one is not
///   on the record
pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> BookResult<String> {
    replace_phone(book, name, old_phone, new_phone)
        .inspect_err(|e| log_rejection("change_phone", e))
}

fn replace_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> BookResult<String> {
    let record = find_record_mut(book, name)?;
    let new = Phone::new(new_phone)?;
    let old = Phone::new(old_phone)?;

    record
        .edit_phone(&old, new)
        .map_err(|e| BookError::Invalid(e.to_string()))?;

    debug!(contact = name, old_phone, new_phone, "Phone changed");
    Ok(format!(
        "Phone number for {} has been changed to {}.",
        name, new_phone
    ))
}

/// List a contact's phones.
///
/// # Errors
///
/// `BookError::NotFound` if the contact does not exist.
pub fn get_phone(book: &AddressBook, name: &str) -> BookResult<String> {
    let record = book
        .get(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
        .inspect_err(|e| log_rejection("get_phone", e))?;

    Ok(format!(
        "Phone numbers for {}: {}",
        name,
        record.phones_joined()
    ))
}

/// Remove a phone from a contact.
///
/// # Errors
///
/// - `BookError::NotFound` if the contact does not exist
/// - `BookError::Invalid` if the phone is not on the record
pub fn delete_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    remove_phone(book, name, phone).inspect_err(|e| log_rejection("delete_phone", e))
}

fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    let record = find_record_mut(book, name)?;
    let target = Phone::new(phone)?;

    record
        .remove_phone(&target)
        .map_err(|e| BookError::Invalid(e.to_string()))?;

    debug!(contact = name, phone, "Phone deleted");
    Ok(format!(
        "Phone number {} has been deleted from {}.",
        phone, name
    ))
}

/// Render every contact, one per line, under a `Contacts:` header.
pub fn show_all(book: &AddressBook) -> String {
    let mut result = String::from("Contacts:\n");
    result.push_str(&book.list_first(book.count()));
    result
}

fn find_record_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> BookResult<&'a mut Record> {
    book.get_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_john() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&mut book, "John", "1234567").unwrap();
        book
    }

    #[test]
    fn test_add_contact_creates_record() {
        let mut book = AddressBook::new();
        let msg = add_contact(&mut book, "John", "1234567").unwrap();
        assert_eq!(msg, "Contact 'John' with phone '1234567' has been added.");
        assert_eq!(
            get_phone(&book, "John").unwrap(),
            "Phone numbers for John: 1234567"
        );
    }

    #[test]
    fn test_add_contact_appends_to_existing() {
        let mut book = book_with_john();
        add_contact(&mut book, "John", "7654321").unwrap();
        add_contact(&mut book, "John", "1234567").unwrap();
        assert_eq!(book.count(), 1);
        assert_eq!(
            get_phone(&book, "John").unwrap(),
            "Phone numbers for John: 1234567, 7654321, 1234567"
        );
    }

    #[test]
    fn test_add_contact_rejects_invalid_input() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add_contact(&mut book, "J0hn", "1234567"),
            Err(BookError::Invalid(_))
        ));
        assert!(matches!(
            add_contact(&mut book, "John", "12"),
            Err(BookError::Invalid(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_phone() {
        let mut book = book_with_john();
        let msg = change_phone(&mut book, "John", "1234567", "7654321").unwrap();
        assert_eq!(msg, "Phone number for John has been changed to 7654321.");
        assert_eq!(
            get_phone(&book, "John").unwrap(),
            "Phone numbers for John: 7654321"
        );
    }

    #[test]
    fn test_change_phone_failures() {
        let mut book = book_with_john();
        assert!(matches!(
            change_phone(&mut book, "Jane", "1234567", "7654321"),
            Err(BookError::NotFound(_))
        ));
        assert!(matches!(
            change_phone(&mut book, "John", "1234567", "1"),
            Err(BookError::Invalid(_))
        ));
        assert!(matches!(
            change_phone(&mut book, "John", "9999999", "7654321"),
            Err(BookError::Invalid(_))
        ));
        assert_eq!(
            get_phone(&book, "John").unwrap(),
            "Phone numbers for John: 1234567"
        );
    }

    #[test]
    fn test_get_phone_unknown_contact() {
        let book = AddressBook::new();
        assert_eq!(
            get_phone(&book, "Unknown"),
            Err(BookError::NotFound("Unknown".to_string()))
        );
    }

    #[test]
    fn test_delete_phone() {
        let mut book = book_with_john();
        let msg = delete_phone(&mut book, "John", "1234567").unwrap();
        assert_eq!(msg, "Phone number 1234567 has been deleted from John.");
        assert_eq!(get_phone(&book, "John").unwrap(), "Phone numbers for John: ");
    }

    #[test]
    fn test_delete_missing_phone_is_invalid() {
        let mut book = book_with_john();
        assert!(matches!(
            delete_phone(&mut book, "John", "9999999"),
            Err(BookError::Invalid(_))
        ));
        assert!(matches!(
            delete_phone(&mut book, "Jane", "1234567"),
            Err(BookError::NotFound(_))
        ));
    }

    #[test]
    fn test_show_all() {
        let mut book = book_with_john();
        add_contact(&mut book, "Jane", "5555").unwrap();
        assert_eq!(
            show_all(&book),
            "Contacts:\n\
             Name: John, Phones: 1234567, Birthday: None\n\
             Name: Jane, Phones: 5555, Birthday: None\n"
        );
        assert_eq!(show_all(&AddressBook::new()), "Contacts:\n");
    }
}
