//! Draft storage: the wizard session persisting between invocations.
//!
//! The whole session (current step, draft fields, scratch entries) is
//! one JSON file, rewritten after every command. The file is removed on
//! publish or discard — a missing file means no draft is in progress.

use std::fs;

use crate::wizard::Wizard;

use super::{Result, Storage, StorageError};

impl Storage {
    /// Starts a draft session. Fails if one is already in progress.
    pub fn create_draft(&self, wizard: &Wizard) -> Result<()> {
        if self.draft_path().exists() {
            return Err(StorageError::DraftAlreadyExists);
        }
        self.save_draft(wizard)
    }

    /// Writes the draft session, replacing any existing one.
    pub fn save_draft(&self, wizard: &Wizard) -> Result<()> {
        let json = serde_json::to_string_pretty(wizard)?;
        fs::write(self.draft_path(), json)?;
        Ok(())
    }

    /// Loads the draft session.
    pub fn load_draft(&self) -> Result<Wizard> {
        let path = self.draft_path();
        if !path.exists() {
            return Err(StorageError::DraftNotFound);
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Removes the draft session.
    ///
    /// Idempotent: does nothing if no draft exists.
    pub fn clear_draft(&self) -> Result<()> {
        let path = self.draft_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
