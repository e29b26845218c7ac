mod note;

pub use note::Note;

use chrono::Utc;

use crate::error::{Result, StickyError};

/// Hands out note ids.
///
/// Ids are milliseconds since the Unix epoch so they stay compatible with
/// collections written by timestamp-keyed clients, but the generator never
/// repeats itself: when the clock has not moved past the last id it bumps to
/// `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the generator so it never returns an id already in `notes`.
    pub fn seeded_from(notes: &[Note]) -> Self {
        let mut ids = Self::new();
        ids.observe(notes);
        ids
    }

    /// Make sure later ids land above everything in `notes`.
    pub fn observe(&mut self, notes: &[Note]) {
        if let Some(max) = notes.iter().map(|n| n.id).max() {
            self.last = self.last.max(max);
        }
    }

    /// Fails once the largest id has been handed out or stored.
    pub fn next_id(&mut self) -> Result<u64> {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    fn next_at(&mut self, now_millis: u64) -> Result<u64> {
        let id = if now_millis > self.last {
            now_millis
        } else {
            self.last.checked_add(1).ok_or(StickyError::IdsExhausted)?
        };
        self.last = id;
        Ok(id)
    }
}
