pub mod board;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod storage;
pub mod telemetry;

pub use board::{Board, Confirm, FixedAnswer, NoteElement};
pub use config::Config;
pub use entity::{IdGenerator, Note};
pub use error::{Result, StickyError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, NotesStore};
