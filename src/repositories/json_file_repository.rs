use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Book repository backed by a pretty-printed JSON file.
///
/// The file holds an array of records in insertion order. Writes go to a
/// sibling temporary file first and are renamed into place, so a failed
/// store never leaves a half-written book behind.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, err: std::io::Error) -> StorageError {
        match err.kind() {
            ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
            ErrorKind::PermissionDenied => StorageError::PermissionDenied(self.path.clone()),
            ErrorKind::InvalidData => StorageError::Corrupt {
                path: self.path.clone(),
                reason: err.to_string(),
            },
            _ => StorageError::Io(err),
        }
    }
}

#[async_trait]
impl BookRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        if raw.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "Contact book file is empty");
            return Ok(AddressBook::new());
        }

        let book: AddressBook =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.size(),
            "Contact book loaded"
        );
        Ok(book)
    }

    async fn store(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| self.io_error(e))?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                tracing::warn!(path = %temp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(self.io_error(e));
        }

        tracing::info!(
            path = %self.path.display(),
            contacts = book.size(),
            "Contact book saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_book() -> AddressBook {
        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_birthday("17.10.1989").unwrap();
        let mut book = AddressBook::new();
        book.add_record(john).unwrap();
        book.add_record(Record::new("Jane").unwrap()).unwrap();
        book
    }

    #[tokio::test]
    async fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("contacts.json"));

        let result = repo.load().await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested/data/contacts.json"));
        let book = sample_book();

        repo.store(&book).await.unwrap();
        let loaded = repo.load().await.unwrap();

        assert_eq!(loaded, book);
        assert!(!repo.temp_path().exists());
    }

    #[tokio::test]
    async fn test_load_empty_file_gives_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "  \n").unwrap();

        let book = JsonFileRepository::new(&path).load().await.unwrap();
        assert!(book.is_empty());
    }

    #[tokio::test]
    async fn test_load_invalid_json_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonFileRepository::new(&path).load().await;
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_load_invalid_phone_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, r#"[{"name":"John","phones":["123"]}]"#).unwrap();

        let result = JsonFileRepository::new(&path).load().await;
        match result {
            Err(StorageError::Corrupt { reason, .. }) => assert!(reason.contains("123")),
            other => panic!("Expected Corrupt error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_non_utf8_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x5b]).unwrap();

        let result = JsonFileRepository::new(&path).load().await;
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the rename fail after the temp write.
        let path = dir.path().join("contacts.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupant"), "x").unwrap();
        let repo = JsonFileRepository::new(&path);

        let result = repo.store(&sample_book()).await;
        assert!(result.is_err());
        assert!(!repo.temp_path().exists());
    }

    #[tokio::test]
    async fn test_store_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        JsonFileRepository::new(&path)
            .store(&sample_book())
            .await
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "John");
        assert_eq!(value[0]["birthday"], "17.10.1989");
        assert_eq!(value[1]["phones"], serde_json::json!([]));
    }
}
