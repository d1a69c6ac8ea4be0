//! Key-value store backed by one JSON file per key.
//!
//! `<data_dir>/<key>.json` holds the raw value. Writes go to a temp file that
//! is renamed over the target, so a crash mid-write leaves the previous value
//! intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::kv::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            // Never written yet - not an error
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::write(key, e))?;

        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(|e| StoreError::write(key, e))?;
        fs::rename(&temp_path, &path).map_err(|e| StoreError::write(key, e))?;

        tracing::trace!(key, path = %path.display(), "store write");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());

        store.set("todos", r#"[{"id":"1","text":"a"}]"#).unwrap();

        assert_eq!(
            store.get("todos").unwrap().as_deref(),
            Some(r#"[{"id":"1","text":"a"}]"#)
        );
        assert!(dir.path().join("todos.json").exists());
        assert!(!dir.path().join("todos.json.tmp").exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = JsonFileStore::new(&nested);

        store.set("settings", "{}").unwrap();

        assert!(nested.join("settings.json").exists());
    }

    #[test]
    fn test_overwrite_keeps_last_value() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());

        store.set("todos", "[1]").unwrap();
        store.set("todos", "[2]").unwrap();

        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_keys_are_separate_files() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());

        store.set("todos", "[]").unwrap();
        store.set("settings", "{}").unwrap();

        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("settings").unwrap().as_deref(), Some("{}"));
    }
}
