//! Contact Book - a personal address book driven from an interactive console.
//!
//! Contacts carry a name, any number of phone numbers and an optional
//! birthday. The book is loaded from a JSON file at start-up, edited through
//! console commands and saved back on exit.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: Contact records, the address book and the weekly birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence of the address book
//! - **session**: Application context owning the book and its repository
//! - **console**: Command dispatcher and the read-dispatch-print loop

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use config::Config;
pub use console::{dispatch, run_console, Command, ExitReason};
pub use domain::{Birthday, FieldValue, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, Record, WeeklyBirthdays};
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::Session;
