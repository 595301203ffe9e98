// SPDX-License-Identifier: MPL-2.0
//! Client-scoped key/value storage.
//!
//! Storage outlives a single provider mount (and the process, for
//! [`FileStorage`]) but is private to one client profile, the same scope a
//! browser gives to `localStorage`. Values are opaque strings; callers own
//! their encoding.

use super::paths;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Extension appended to every key on disk.
const VALUE_EXTENSION: &str = "json";

/// A durable string slot store keyed by name.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Reads and clears `key` in one step.
    fn take(&self, key: &str) -> Result<Option<String>> {
        let value = self.get(key)?;
        if value.is_some() {
            self.remove(key)?;
        }
        Ok(value)
    }
}

/// Storage backed by one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the storage in the application data directory.
    pub fn open_default() -> Result<Self> {
        paths::get_app_data_dir()
            .map(Self::new)
            .ok_or_else(|| Error::Storage("no data directory available".to_string()))
    }

    /// Returns the directory holding the stored values.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{VALUE_EXTENSION}"))
    }
}

fn storage_error(key: &str, err: &std::io::Error) -> Error {
    Error::Storage(format!("{key}: {err}"))
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(key, &err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|err| storage_error(key, &err))?;

        // Write-then-rename so a reader never sees a half-written value.
        let path = self.value_path(key);
        let staging = path.with_extension("tmp");
        fs::write(&staging, value).map_err(|err| storage_error(key, &err))?;
        fs::rename(&staging, &path).map_err(|err| storage_error(key, &err))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(key, &err)),
        }
    }

    fn take(&self, key: &str) -> Result<Option<String>> {
        // Moving the file out first means a concurrent writer lands in a
        // fresh slot instead of being deleted unread.
        let path = self.value_path(key);
        let claimed = path.with_extension("draining");
        match fs::rename(&path, &claimed) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(storage_error(key, &err)),
        }

        let value = fs::read_to_string(&claimed);
        if let Err(err) = fs::remove_file(&claimed) {
            log::warn!("Failed to delete claimed slot {}: {err}", claimed.display());
        }
        value.map(Some).map_err(|err| storage_error(key, &err))
    }
}

/// In-memory storage; lives as long as the value itself.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| Error::Storage("memory storage lock poisoned".to_string()))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values()?.remove(key);
        Ok(())
    }

    fn take(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_storage_get_missing_key_is_none() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path());
        assert_eq!(storage.get("absent").expect("get"), None);
    }

    #[test]
    fn file_storage_set_creates_nested_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let dir = temp_dir.path().join("nested").join("deeply");
        let storage = FileStorage::new(&dir);

        storage.set("slot", "value").expect("set");
        assert!(dir.join("slot.json").exists());
        assert_eq!(storage.get("slot").expect("get").as_deref(), Some("value"));
    }

    #[test]
    fn file_storage_set_overwrites() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path());

        storage.set("slot", "first").expect("set");
        storage.set("slot", "second").expect("set");
        assert_eq!(storage.get("slot").expect("get").as_deref(), Some("second"));
    }

    #[test]
    fn file_storage_take_clears_slot() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path());
        storage.set("slot", "value").expect("set");

        assert_eq!(storage.take("slot").expect("take").as_deref(), Some("value"));
        assert_eq!(storage.take("slot").expect("take"), None);
        assert!(!temp_dir.path().join("slot.draining").exists());
    }

    #[test]
    fn file_storage_remove_is_idempotent() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path());
        storage.remove("slot").expect("remove absent");
        storage.set("slot", "value").expect("set");
        storage.remove("slot").expect("remove");
        storage.remove("slot").expect("remove again");
        assert_eq!(storage.get("slot").expect("get"), None);
    }

    #[test]
    fn separate_directories_do_not_interfere() {
        let dir_a = tempdir().expect("create temp dir A");
        let dir_b = tempdir().expect("create temp dir B");
        let storage_a = FileStorage::new(dir_a.path());
        let storage_b = FileStorage::new(dir_b.path());

        storage_a.set("slot", "a").expect("set");
        assert_eq!(storage_b.get("slot").expect("get"), None);
    }

    #[test]
    fn memory_storage_take_clears_slot() {
        let storage = MemoryStorage::new();
        storage.set("slot", "value").expect("set");
        assert_eq!(storage.take("slot").expect("take").as_deref(), Some("value"));
        assert_eq!(storage.get("slot").expect("get"), None);
    }
}
