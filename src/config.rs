use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_PLACEHOLDER;
use crate::error::Result;
use crate::storage::DEFAULT_STORAGE_KEY;

pub const DATA_DIR: &str = ".sticky-notes";
pub const CONFIG_FILE: &str = "config.yaml";
pub const DIR_ENV: &str = "STICKY_NOTES_DIR";

/// Board settings, read from `config.yaml` in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Slot the collection is stored under.
    pub storage_key: String,
    /// Text shown in a box with no content.
    pub placeholder: String,
    /// Ask before deleting a note.
    pub confirm_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            confirm_delete: true,
        }
    }
}

impl Config {
    /// Load `config.yaml` from `dir`, falling back to defaults when absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

/// Work out which data directory to use.
///
/// An explicit path wins, then `STICKY_NOTES_DIR`, then the nearest
/// `.sticky-notes/` above the current directory, then `./.sticky-notes`.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = env::var_os(DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_data_dir(&cwd).unwrap_or_else(|| cwd.join(DATA_DIR))
}

/// Where `init` creates a board: an explicit path, then `STICKY_NOTES_DIR`,
/// then `./.sticky-notes`. Parent directories are not searched.
pub fn init_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os(DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| {
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(DATA_DIR)
        })
}

fn find_data_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(DATA_DIR);
        if candidate.is_dir() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}
