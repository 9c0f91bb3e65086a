//! Address book operations.
//!
//! Operations take the book plus raw string arguments, validate the input by
//! building domain values, then mutate or query the book. Every failure is
//! returned as a categorized [`BookError`](crate::error::BookError):
//! - **NotFound**: the referenced contact (or its birthday) is missing
//! - **Invalid**: a field failed validation, a count is unusable, or a phone
//!   is not on the record

mod birthdays;
mod contacts;
mod paging;

pub use birthdays::{add_birthday, add_birthday_on, happy_birthday, happy_birthday_on};
pub use contacts::{add_contact, change_phone, delete_phone, get_phone, show_all};
pub use paging::list_first;

use crate::error::BookError;
use tracing::warn;

fn log_rejection(operation: &'static str, err: &BookError) {
    warn!(operation, category = err.category(), "Rejected: {}", err);
}
