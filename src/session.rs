//! Application context for one console session.
//!
//! A `Session` owns the address book and the repository it came from. The
//! book is loaded when the session opens and flushed back when it closes.

use crate::console::dispatch;
use crate::error::{BookResult, StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Source of "today" for the birthday query.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The address book plus the storage it is persisted to.
pub struct Session {
    book: AddressBook,
    repository: Arc<dyn BookRepository>,
    clock: Clock,
}

impl Session {
    /// Start a session over an already loaded book.
    pub fn new(book: AddressBook, repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book,
            repository,
            clock: local_today,
        }
    }

    /// Load the saved book, starting empty if nothing was saved yet.
    ///
    /// Any other storage failure is returned to the caller, which should
    /// treat it as fatal.
    pub async fn open(repository: Arc<dyn BookRepository>) -> StorageResult<Self> {
        let book = match repository.load().await {
            Ok(book) => book,
            Err(StorageError::NotFound(path)) => {
                tracing::info!(path = %path.display(), "No saved contacts, starting empty");
                AddressBook::new()
            }
            Err(e) => {
                tracing::error!("Failed to load contacts: {}", e);
                return Err(e);
            }
        };
        Ok(Self::new(book, repository))
    }

    /// Replace the clock used by `birthdays`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one command against the book.
    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> BookResult<String> {
        tracing::debug!(command = %command, args = args.len(), "Dispatching command");
        dispatch(&mut self.book, command, args, (self.clock)())
    }

    /// Persist the book. An empty book is not written.
    pub async fn close(self) -> StorageResult<()> {
        if self.book.is_empty() {
            tracing::info!("Contact book is empty, skipping save");
            return Ok(());
        }

        self.repository.store(&self.book).await.map_err(|e| {
            tracing::error!("Failed to save contacts: {}", e);
            e
        })
    }
}
