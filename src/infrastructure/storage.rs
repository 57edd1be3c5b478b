//! Key-value persistence port and its implementations

use crate::error::{JournalError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Synchronous key-value storage holding whole serialized values
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when nothing is stored
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(JournalError::Config(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::StorageUnavailable(format!(
                "cannot read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Write to a temp file in the same directory, then rename into place, so
    /// the stored value is either fully replaced or left as it was.
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let unavailable = |e: std::io::Error| {
            JournalError::StorageUnavailable(format!("cannot write {}: {}", path.display(), e))
        };

        fs::create_dir_all(&self.dir).map_err(unavailable)?;

        let tmp_path = self
            .dir
            .join(format!("{}.json.dayjot-tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value).map_err(unavailable)?;

        // On Windows, `rename` does not overwrite existing files
        #[cfg(windows)]
        if path.exists() {
            fs::remove_file(&path).map_err(unavailable)?;
        }

        fs::rename(&tmp_path, &path).map_err(unavailable)?;
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

/// In-process storage, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`, e.g. to simulate previously stored data
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
