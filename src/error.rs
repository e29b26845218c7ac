use thiserror::Error;

#[derive(Error, Debug)]
pub enum StickyError {
    #[error("No sticky-notes board here. Run 'sticky-notes init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .sticky-notes/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Note not found: {0}")]
    NoteNotFound(u64),

    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    #[error("No note ids left: the board already holds the largest id")]
    IdsExhausted,

    #[error("Use --force to delete in non-interactive mode")]
    ConfirmationRequired,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, StickyError>;
