//! Bounded listing of the first N contacts.

use super::log_rejection;
use crate::error::{BookError, BookResult};
use crate::models::AddressBook;
use tracing::debug;

/// List the first `count` contacts under a `Contacts:` header.
///
/// # Errors
///
/// `BookError::Invalid` if `count` is not a positive integer or exceeds the
/// number of contacts in the book.
pub fn list_first(book: &AddressBook, count: &str) -> BookResult<String> {
    let n = parse_count(book, count).inspect_err(|e| log_rejection("list_first", e))?;

    debug!(requested = n, total = book.count(), "Listing contacts");
    let mut result = String::from("Contacts:\n");
    result.push_str(&book.list_first(n));
    Ok(result)
}

fn parse_count(book: &AddressBook, count: &str) -> BookResult<usize> {
    let n = count.trim().parse::<usize>().map_err(|_| {
        BookError::Invalid(format!("count must be a positive number, got: {}", count))
    })?;

    if n == 0 {
        return Err(BookError::Invalid("count must be at least 1".to_string()));
    }

    if n > book.count() {
        return Err(BookError::Invalid(format!(
            "count {} exceeds {} contacts",
            n,
            book.count()
        )));
    }

    Ok(n)
}
