use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStore, StorageError};

/// Store persisted as a flat JSON object on disk.
///
/// The file is re-read on every access so separate processes sharing a path
/// see each other's writes.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("session.json"));
        assert_eq!(store.get("languageDetectionDone").unwrap(), None);
    }

    #[test]
    fn writes_survive_a_new_handle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");
        JsonFileStore::new(&path).set("preferredLanguage", "fa").unwrap();
        JsonFileStore::new(&path).set("languageDetectionDone", "true").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("preferredLanguage").unwrap().as_deref(), Some("fa"));
        assert_eq!(reopened.get("languageDetectionDone").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(JsonFileStore::new(&path).get("x"), Err(StorageError::Json(_))));
    }
}
