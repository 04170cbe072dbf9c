//! Domain value objects and types.
//!
//! This module contains the field types a contact record is built from.
//! `Name`, `Phone` and `Birthday` validate at construction time so an
//! invalid value can never end up inside a record or on disk.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::FieldValue;
pub use name::Name;
pub use phone::Phone;
