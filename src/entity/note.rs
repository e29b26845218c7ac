// src/entity/note.rs
use serde::{Deserialize, Serialize};

/// A single sticky note as it is stored in the collection slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub content: String,
}

impl Note {
    /// A fresh note always starts out empty.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            content: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
