use std::fs;
use std::io;
use std::path::PathBuf;

use super::KeyValueStorage;
use crate::error::{Result, StickyError};

const SLOT_EXTENSION: &str = "json";

/// Slot store backed by a directory, one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.starts_with('.') || key.contains(|c| c == '/' || c == '\\') {
            return Err(StickyError::Storage(format!("invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        // Write beside the slot and rename so readers never see half a value.
        let tmp = self.dir.join(format!(".{}.{}.tmp", key, SLOT_EXTENSION));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }
        Ok(())
    }
}
