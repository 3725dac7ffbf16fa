//! Roster configuration.
//!
//! Loaded from `~/.roster/config.toml`. The file is optional: when it
//! is missing, the built-in reference lists are used as-is.

use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

use crate::reference;

/// Roster configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Primary fields offered to profile authors.
    #[serde(default = "default_primary_fields")]
    pub primary_fields: Vec<String>,

    /// Locations offered to profile authors.
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_fields: default_primary_fields(),
            locations: default_locations(),
        }
    }
}

impl Config {
    /// Load config from `~/.roster/config.toml`.
    /// A missing file (or undeterminable home) yields the defaults.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.roster/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".roster").join("config.toml"))
    }
}

fn default_primary_fields() -> Vec<String> {
    reference::PRIMARY_FIELDS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_locations() -> Vec<String> {
    reference::LOCATIONS.iter().map(ToString::to_string).collect()
}
