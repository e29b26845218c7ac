mod file_store;
mod memory;

pub use file_store::FileStorage;
pub use memory::MemoryStorage;

use tracing::{debug, warn};

use crate::entity::Note;
use crate::error::Result;

/// Storage key the whole collection lives under.
pub const DEFAULT_STORAGE_KEY: &str = "sticky-notes";

/// A string-to-string slot store, the moral equivalent of a browser's
/// local storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads and writes the full notes collection as one JSON blob.
pub struct NotesStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> NotesStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted collection.
    ///
    /// Never fails: an absent slot, an unreadable slot or a value that is not
    /// a JSON array of notes all come back as an empty collection.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read notes slot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Note>>>(&raw) {
            Ok(notes) => {
                let notes = notes.unwrap_or_default();
                debug!(key = %self.key, count = notes.len(), "loaded notes");
                notes
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored notes are corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full collection.
    pub fn save(&mut self, notes: &[Note]) -> Result<()> {
        let json = serde_json::to_string(notes)?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, count = notes.len(), "saved notes");
        Ok(())
    }
}
