use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::repository::{KeyValueStore, StorageError};

/// File-backed key-value store keeping one `<key>.json` file per key under a
/// data directory.
///
/// Writes replace the whole file synchronously; there is no partial-write
/// recovery, matching the one-document-per-save persistence model.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens the store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), payload)?;
        Ok(())
    }
}
