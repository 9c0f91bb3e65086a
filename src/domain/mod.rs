//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is built from:
//! names, phone numbers and birthdays. Each one is backed by a [`Field`]
//! tagged with its [`FieldKind`], which owns the validity predicate and the
//! rendering rule. Invalid data cannot be represented once constructed.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{Field, FieldKind};
pub use name::Name;
pub use phone::Phone;
