//! Named-file stores the ledger persists through
//!
//! The ledger only needs five capabilities from storage: prepare the data
//! directory, and read, write, test and delete a named file inside it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_text, write_text_atomic};

/// Flat namespace of text files
pub trait FileStore {
    /// Make sure the backing location exists
    fn ensure_directory(&self) -> LedgerResult<()>;

    /// Replace the contents of `name`
    fn write(&self, name: &str, contents: &str) -> LedgerResult<()>;

    /// Read the whole of `name`
    fn read(&self, name: &str) -> LedgerResult<String>;

    fn exists(&self, name: &str) -> bool;

    /// Remove `name`; returns whether it existed
    fn delete(&self, name: &str) -> LedgerResult<bool>;
}

/// Files inside a data directory on disk
#[derive(Debug, Clone)]
pub struct DiskStore {
    data_dir: PathBuf,
}

impl DiskStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a named file
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

impl FileStore for DiskStore {
    fn ensure_directory(&self) -> LedgerResult<()> {
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(LedgerError::Storage(format!(
                "{} exists but is not a directory",
                self.data_dir.display()
            )));
        }

        fs::create_dir_all(&self.data_dir).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })
    }

    fn write(&self, name: &str, contents: &str) -> LedgerResult<()> {
        write_text_atomic(self.file_path(name), contents)
    }

    fn read(&self, name: &str) -> LedgerResult<String> {
        read_text(self.file_path(name))
    }

    fn exists(&self, name: &str) -> bool {
        self.file_path(name).exists()
    }

    fn delete(&self, name: &str) -> LedgerResult<bool> {
        let path = self.file_path(name);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path).map_err(|e| {
            LedgerError::Storage(format!("Failed to delete {}: {}", path.display(), e))
        })?;
        Ok(true)
    }
}

/// In-memory store for tests and embedding callers
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileStore for MemoryStore {
    fn ensure_directory(&self) -> LedgerResult<()> {
        Ok(())
    }

    fn write(&self, name: &str, contents: &str) -> LedgerResult<()> {
        let mut files = self.files.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        files.insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn read(&self, name: &str) -> LedgerResult<String> {
        let files = self.files.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        files
            .get(name)
            .cloned()
            .ok_or_else(|| LedgerError::Storage(format!("File not found: {}", name)))
    }

    fn exists(&self, name: &str) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(name))
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> LedgerResult<bool> {
        let mut files = self.files.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(files.remove(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_disk_store_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskStore::new(temp_dir.path().join("data"));

        store.ensure_directory().unwrap();
        assert!(store.data_dir().is_dir());
        assert!(!store.exists("accounts.dat"));

        store.write("accounts.dat", "hello").unwrap();
        assert!(store.exists("accounts.dat"));
        assert_eq!(store.read("accounts.dat").unwrap(), "hello");

        assert!(store.delete("accounts.dat").unwrap());
        assert!(!store.exists("accounts.dat"));
        assert!(!store.delete("accounts.dat").unwrap());
    }

    #[test]
    fn test_disk_store_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let store = DiskStore::new(&blocker);
        assert!(matches!(
            store.ensure_directory(),
            Err(LedgerError::Storage(_))
        ));
    }

    #[test]
    fn test_disk_store_read_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskStore::new(temp_dir.path());
        assert!(store.read("missing.dat").is_err());
    }

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryStore::new();
        store.ensure_directory().unwrap();

        assert!(!store.exists("a"));
        store.write("a", "one").unwrap();
        store.write("a", "two").unwrap();
        assert_eq!(store.read("a").unwrap(), "two");

        assert!(store.delete("a").unwrap());
        assert!(store.read("a").is_err());
    }
}
