use crate::error::StorageResult;
use crate::models::AddressBook;
use async_trait::async_trait;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over where and how the book is stored,
/// enabling different implementations (JSON file, in-memory mock).
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Load the saved book.
    ///
    /// Returns `StorageError::NotFound` when nothing was saved yet.
    async fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved book with `book`.
    async fn store(&self, book: &AddressBook) -> StorageResult<()>;
}
