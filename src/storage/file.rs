//! File-backed key-value backend
//!
//! Each key maps to `<data_dir>/<key>.json`.

use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_optional, write_atomic};
use super::KeyValueStore;

/// Key-value store keeping one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Resolve the file for a key
    ///
    /// Keys are restricted to ASCII letters, digits, `-` and `_` so they
    /// can never escape the data directory.
    pub fn key_path(&self, key: &str) -> ExpenseResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ExpenseError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        read_optional(self.key_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        write_atomic(self.key_path(key)?, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("expense").unwrap(), None);
        store.set("expense", "[]").unwrap();
        assert_eq!(store.get("expense").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("expense.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.key_path("../escape").is_err());
        assert!(store.key_path("").is_err());
        assert!(store.key_path("a/b").is_err());
        assert!(store.key_path("my_expenses-2").is_ok());
    }
}
