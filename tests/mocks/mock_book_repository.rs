use async_trait::async_trait;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookRepository;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the "saved" book in memory, can be told to fail loads or stores,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookRepository {
    saved: Arc<Mutex<Option<AddressBook>>>,
    corrupt: Arc<Mutex<bool>>,
    fail_store: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing saved.
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(None)),
            corrupt: Arc::new(Mutex::new(false)),
            fail_store: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(book);
        repo
    }

    /// Make every load fail as corrupt.
    pub fn set_corrupt(&self) {
        *self.corrupt.lock().unwrap() = true;
    }

    /// Make every store fail with permission denied.
    pub fn set_fail_store(&self) {
        *self.fail_store.lock().unwrap() = true;
    }

    /// The last stored book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn path() -> PathBuf {
        PathBuf::from("mock/contacts.json")
    }
}

impl Default for MockBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if *self.corrupt.lock().unwrap() {
            return Err(StorageError::Corrupt {
                path: Self::path(),
                reason: "mock corruption".to_string(),
            });
        }

        self.saved
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StorageError::NotFound(Self::path()))
    }

    async fn store(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("store");

        if *self.fail_store.lock().unwrap() {
            return Err(StorageError::PermissionDenied(Self::path()));
        }

        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
