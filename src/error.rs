//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! `BookError` covers everything a console session reports and survives;
//! `StorageError` and `ConfigError` are fatal to the process.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by address book operations and command dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number or date did not pass validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// No contact with this name
    #[error("there is no contact named {0}. Use command \"add\" to create")]
    ContactNotFound(String),

    /// The contact exists but does not have this phone
    #[error("phone {phone} wasn't found in record {name}")]
    PhoneNotFound { name: String, phone: String },

    /// The contact exists but has no birthday yet
    #[error("{0} has no birthday set. Use command \"add-birthday\" to set it")]
    BirthdayNotSet(String),

    /// A contact with this name is already in the book
    #[error("contact {0} already exists")]
    AlreadyExists(String),

    /// Wrong number of arguments for a command
    #[error("command \"{command}\" expects {expected} argument(s) ({usage}), got {got}")]
    BadArity {
        command: String,
        usage: String,
        expected: usize,
        got: usize,
    },

    /// Command name is not recognised
    #[error("invalid command: {0}. Type \"help\" to see the list of commands")]
    UnknownCommand(String),
}

/// Errors raised by the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No saved contact book at this path
    #[error("contact book file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but does not hold a valid contact book
    #[error("contact book file {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The process may not read or write the file
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the book
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
