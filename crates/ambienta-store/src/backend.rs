//! Key-value backends.
//!
//! The engine only ever sees [`StateStore`]; which backend sits behind it is
//! an application decision. The file-backed store writes each record
//! atomically (temp file + rename) so a crash mid-write can corrupt at most
//! the temp file, never a record.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Durable string-to-string record store. Object safe so callers can hold
/// `&mut dyn StateStore`.
pub trait StateStore {
    /// Read a record. Absence is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a record. Deleting an absent record is a no-op.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.records.remove(key);
        Ok(())
    }
}

/// File-backed store keeping one `<key>.json` file per record under a state
/// directory. The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.record_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io("read", path, err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.record_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir)
            .map_err(|err| StoreError::io("create directory", &self.dir, err))?;

        let mut file =
            File::create(&temp_path).map_err(|err| StoreError::io("create", &temp_path, err))?;
        file.write_all(value.as_bytes())
            .map_err(|err| StoreError::io("write", &temp_path, err))?;
        file.sync_all()
            .map_err(|err| StoreError::io("sync", &temp_path, err))?;

        fs::rename(&temp_path, &path).map_err(|err| StoreError::Rename {
            temp_path: temp_path.clone(),
            path: path.clone(),
            source: err,
        })?;

        tracing::debug!(key, path = %path.display(), "record written");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.record_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::io("delete", path, err)),
        }
    }
}
