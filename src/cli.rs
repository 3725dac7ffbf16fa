//! CLI interface for Roster.
//!
//! Designed for scripts and humans alike to author and browse profiles
//! from the command line. Each subcommand is non-interactive: arguments
//! in, structured output out.
//!
//! Commands split into two groups:
//!
//! - `roster draft <command>` — the authoring wizard, one session at a time.
//! - `roster browse|show|fields|locations` — the published directory.

mod browse;
mod draft;
mod format;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::config::Config;
use crate::directory::{AvailabilityFilter, ExperienceBucket, FilterCriteria};
use crate::model::Profile;
use crate::storage::Storage;

use draft::DraftCommand;

/// Roster — a professional profile directory in your terminal.
#[derive(Debug, Parser)]
#[command(name = "roster", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: authoring a profile
  1. roster draft start
  2. roster draft set --first-name Ada --last-name Lovelace --email ada@example.com
  3. roster draft next
  4. roster draft set --field Engineering --summary "Analytical engines, end to end."
  5. roster draft next    (repeat through the remaining steps)
  6. roster draft complete
     → prints the new profile ID

Browse:
  roster browse --field Engineering --experience 3-5
  roster browse figma --remote-only
  roster show ada-lovelace"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Author a profile step by step.
    ///
    /// One draft session at a time. Every command persists the session,
    /// so a draft survives between invocations.
    Draft {
        #[command(subcommand)]
        command: DraftCommand,
    },

    /// Search the directory.
    ///
    /// All given clauses must match. With no clauses, lists every
    /// profile, newest first.
    Browse {
        /// Free-text query against names, fields, skills, and tools.
        query: Option<String>,

        /// Exact primary field.
        #[arg(long)]
        field: Option<String>,

        /// Availability filter.
        #[arg(long, value_enum)]
        availability: Option<AvailabilityArg>,

        /// Location, "City, Country". Only the city part is matched.
        #[arg(long)]
        location: Option<String>,

        /// Experience band in years.
        #[arg(long, value_enum)]
        experience: Option<BucketArg>,

        /// Keep only profiles open to remote work.
        #[arg(long)]
        remote_only: bool,

        /// Output the matching profiles as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Show one profile.
    Show {
        /// Profile ID (full UUID or unambiguous prefix) or slug.
        reference: String,

        /// Output the profile as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the primary fields offered during authoring.
    Fields,

    /// List the locations offered during authoring.
    Locations,
}

/// CLI-facing availability filter, mapped to the domain `AvailabilityFilter`.
#[derive(Debug, Clone, ValueEnum)]
pub enum AvailabilityArg {
    /// No availability clause.
    Any,
    /// Only profiles open to work.
    Open,
    /// Only profiles not open to work.
    Closed,
}

impl AvailabilityArg {
    fn to_domain(&self) -> AvailabilityFilter {
        match self {
            Self::Any => AvailabilityFilter::Any,
            Self::Open => AvailabilityFilter::Open,
            Self::Closed => AvailabilityFilter::Closed,
        }
    }
}

/// CLI-facing experience band, mapped to the domain `ExperienceBucket`.
#[derive(Debug, Clone, ValueEnum)]
pub enum BucketArg {
    /// Up to two years, inclusive.
    #[value(name = "0-2")]
    UpToTwo,
    /// More than two, up to five.
    #[value(name = "3-5")]
    ThreeToFive,
    /// More than five, up to ten.
    #[value(name = "6-10")]
    SixToTen,
    /// More than ten.
    #[value(name = "10+")]
    TenPlus,
}

impl BucketArg {
    fn to_domain(&self) -> ExperienceBucket {
        match self {
            Self::UpToTwo => ExperienceBucket::UpToTwo,
            Self::ThreeToFive => ExperienceBucket::ThreeToFive,
            Self::SixToTen => ExperienceBucket::SixToTen,
            Self::TenPlus => ExperienceBucket::TenPlus,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Draft { command } => match command {
            DraftCommand::Start => draft::cmd_start(storage),
            DraftCommand::Set(args) => draft::cmd_set(storage, args),
            DraftCommand::Stage { item } => draft::cmd_stage(storage, item),
            DraftCommand::Add { item } => draft::cmd_add(storage, item),
            DraftCommand::Remove { kind, index } => draft::cmd_remove(storage, &kind, index),
            DraftCommand::Next => draft::cmd_next(storage),
            DraftCommand::Back { step } => draft::cmd_back(storage, step.as_ref()),
            DraftCommand::Status => draft::cmd_status(storage),
            DraftCommand::Show => draft::cmd_show(storage),
            DraftCommand::Complete => draft::cmd_complete(storage),
            DraftCommand::Discard => draft::cmd_discard(storage),
        },
        Command::Browse {
            query,
            field,
            availability,
            location,
            experience,
            remote_only,
            json,
        } => {
            let criteria = FilterCriteria {
                primary_field: field,
                availability: availability.map_or(AvailabilityFilter::Any, |a| a.to_domain()),
                location,
                experience: experience.map(|b| b.to_domain()),
                remote_only,
            };
            browse::cmd_browse(storage, query.as_deref().unwrap_or(""), &criteria, json)
        }
        Command::Show { reference, json } => browse::cmd_show(storage, &reference, json),
        Command::Fields => {
            for field in &config.primary_fields {
                println!("{field}");
            }
            Ok(())
        }
        Command::Locations => {
            for location in &config.locations {
                println!("{location}");
            }
            Ok(())
        }
    }
}

/// Resolve a profile reference (full UUID, unambiguous ID prefix, or
/// slug) to a stored profile.
fn resolve_profile(storage: &Storage, reference: &str) -> Result<Profile, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return storage.load_profile(id).map_err(|e| e.to_string());
    }

    // Try as an ID prefix or slug against all profiles.
    let profiles = storage
        .list_profiles()
        .map_err(|e| format!("failed to list profiles: {e}"))?;

    let matches: Vec<&Profile> = profiles
        .iter()
        .filter(|p| p.id.to_string().starts_with(reference) || p.slug == reference)
        .collect();

    match matches.len() {
        0 => Err(format!("no profile matching '{reference}'")),
        1 => Ok(matches[0].clone()),
        n => {
            let ids: Vec<String> = matches
                .iter()
                .map(|p| p.id.to_string()[..8].to_string())
                .collect();
            Err(format!(
                "'{reference}' is ambiguous — matches {n} profiles: {}",
                ids.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use tempfile::TempDir;

    use crate::model::Availability;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("roster")).unwrap();
        (dir, storage)
    }

    fn sample_profile(first: &str, last: &str) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            slug: format!("{}-{}", first.to_lowercase(), last.to_lowercase()),
            first_name: first.into(),
            last_name: last.into(),
            date_of_birth: String::new(),
            location: "Berlin, Germany".into(),
            profile_photo: String::new(),
            professional_summary: "Ships reliable systems.".into(),
            short_bio: String::new(),
            career_objective: String::new(),
            primary_field: "Engineering".into(),
            skills: Vec::new(),
            tools: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
            availability: Availability::default(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: None,
            linkedin: None,
            portfolio: None,
            created_at: Timestamp::now(),
            featured: false,
        }
    }

    #[test]
    fn resolve_by_full_id_and_prefix() {
        let (_dir, storage) = test_storage();
        let profile = sample_profile("Ada", "Lovelace");
        storage.add_profile(&profile).unwrap();

        let id = profile.id.to_string();
        assert_eq!(resolve_profile(&storage, &id).unwrap().id, profile.id);
        assert_eq!(resolve_profile(&storage, &id[..8]).unwrap().id, profile.id);
    }

    #[test]
    fn resolve_by_slug() {
        let (_dir, storage) = test_storage();
        let profile = sample_profile("Ada", "Lovelace");
        storage.add_profile(&profile).unwrap();

        let resolved = resolve_profile(&storage, "ada-lovelace").unwrap();
        assert_eq!(resolved.id, profile.id);
    }

    #[test]
    fn resolve_ambiguous_reference_fails() {
        let (_dir, storage) = test_storage();
        // Two namesakes share a slug.
        storage.add_profile(&sample_profile("Ada", "Lovelace")).unwrap();
        storage.add_profile(&sample_profile("Ada", "Lovelace")).unwrap();

        let err = resolve_profile(&storage, "ada-lovelace").unwrap_err();
        assert!(err.contains("ambiguous"));
    }

    #[test]
    fn resolve_unknown_reference_fails() {
        let (_dir, storage) = test_storage();
        let err = resolve_profile(&storage, "nobody").unwrap_err();
        assert!(err.contains("no profile matching"));
    }
}
