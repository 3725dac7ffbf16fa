//! Local persistence for the directory and the wizard session.
//!
//! Everything lives under one root:
//!
//! ```text
//! <root>/
//!   draft.json             # The in-progress wizard session, at most one
//!   profiles/<uuid>.json   # One published profile per file
//! ```

use std::{fs, io, path::PathBuf};

use uuid::Uuid;

mod draft;
mod profile;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("profile already exists: {0}")]
    ProfileAlreadyExists(Uuid),

    #[error("a draft is already in progress")]
    DraftAlreadyExists,

    #[error("no draft in progress")]
    DraftNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Local file-based storage for profiles and the draft session.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.roster/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".roster"))
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, id: Uuid) -> PathBuf {
        self.profiles_dir().join(format!("{id}.json"))
    }

    fn draft_path(&self) -> PathBuf {
        self.root.join("draft.json")
    }
}
