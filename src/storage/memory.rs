use std::collections::HashMap;

use super::KeyValueStorage;
use crate::error::{Result, StickyError};

/// In-process slot store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every write, like a browser with storage full.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StickyError::Storage(format!(
                "quota exceeded writing '{}'",
                key
            )));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.get("nope").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_failing_storage_keeps_old_value() {
        let mut storage = MemoryStorage::failing().with_value("k", "old");
        let err = storage.set("k", "new").unwrap_err();
        assert!(matches!(err, StickyError::Storage(_)));
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("old"));
    }
}
