//! Data models for the contact book.
//!
//! A `Record` is one contact; the `AddressBook` is the ordered collection of
//! records plus the weekly birthday query.

pub mod address_book;
pub mod birthdays;
pub mod record;

pub use address_book::AddressBook;
pub use birthdays::{congratulation_day, upcoming_birthdays, weekday_name, WeeklyBirthdays};
pub use record::Record;
