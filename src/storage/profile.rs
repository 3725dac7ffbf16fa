//! Profile storage: publish, load, and list directory profiles.

use std::{fs, io};

use uuid::Uuid;

use crate::model::Profile;

use super::{Result, Storage, StorageError};

impl Storage {
    /// Publishes a profile, writing it as a new JSON file.
    pub fn add_profile(&self, profile: &Profile) -> Result<()> {
        let path = self.profile_path(profile.id);
        if path.exists() {
            return Err(StorageError::ProfileAlreadyExists(profile.id));
        }
        fs::create_dir_all(self.profiles_dir())?;
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads a single profile.
    pub fn load_profile(&self, id: Uuid) -> Result<Profile> {
        let path = self.profile_path(id);
        if !path.exists() {
            return Err(StorageError::ProfileNotFound(id));
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Lists all published profiles, newest first.
    ///
    /// Files that aren't readable profile JSON are silently skipped.
    pub fn list_profiles(&self) -> Result<Vec<Profile>> {
        let mut profiles = Vec::new();
        let entries = match fs::read_dir(self.profiles_dir()) {
            Ok(e) => e,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(profiles),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Ok(json) = fs::read_to_string(&path) else {
                continue;
            };
            if let Ok(profile) = serde_json::from_str(&json) {
                profiles.push(profile);
            }
        }
        profiles.sort_by(|a: &Profile, b: &Profile| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }
}
