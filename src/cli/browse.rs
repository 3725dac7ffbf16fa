//! Directory commands: browse the roster and show single profiles.

use jiff::Timestamp;

use crate::directory::{self, FilterCriteria};
use crate::storage::Storage;

use super::{format, resolve_profile};

pub(super) fn cmd_browse(
    storage: &Storage,
    query: &str,
    criteria: &FilterCriteria,
    json: bool,
) -> Result<(), String> {
    let profiles = storage
        .list_profiles()
        .map_err(|e| format!("failed to list profiles: {e}"))?;

    let now = Timestamp::now();
    let matching = directory::filter(&profiles, query, criteria, now);

    if json {
        let out = serde_json::to_string_pretty(&matching)
            .map_err(|e| format!("failed to serialize profiles: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if matching.is_empty() {
        println!("No matching profiles");
        return Ok(());
    }

    for profile in &matching {
        println!("{}", format::profile_line(profile, now));
    }

    Ok(())
}

pub(super) fn cmd_show(storage: &Storage, reference: &str, json: bool) -> Result<(), String> {
    let profile = resolve_profile(storage, reference)?;

    if json {
        let out = serde_json::to_string_pretty(&profile)
            .map_err(|e| format!("failed to serialize profile: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    for line in format::profile_detail(&profile, Timestamp::now()) {
        println!("{line}");
    }

    Ok(())
}
