//! Draft commands: the authoring wizard driven one invocation at a time.
//!
//! Every command loads the session from storage, applies one change,
//! and writes the session back. A command that fails leaves the stored
//! session untouched.

use clap::{Args, Subcommand, ValueEnum};

use crate::{
    model::{DraftPatch, EmploymentType, SkillLevel, WorkLocation},
    storage::{Storage, StorageError},
    wizard::{EducationPatch, ExperiencePatch, ListKind, PendingExperience, Step, Wizard},
};

#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    /// Start a draft. Fails if one is already in progress.
    Start,

    /// Set draft fields.
    ///
    /// Only the flags you pass change anything; pass an empty string
    /// to clear a field. Fields are validated on `next` and `complete`,
    /// never here.
    Set(SetArgs),

    /// Stage part of an experience or education entry without
    /// committing it.
    Stage {
        #[command(subcommand)]
        item: StageItem,
    },

    /// Add an entry to one of the draft's lists.
    Add {
        #[command(subcommand)]
        item: AddItem,
    },

    /// Remove a list entry by position (0-based, as shown by `draft show`).
    Remove {
        /// Which list to remove from.
        #[arg(value_enum)]
        kind: ListKindArg,

        /// Position of the entry.
        index: usize,
    },

    /// Move to the next step. The current step's gate must be met.
    Next,

    /// Go back one step, or to a named step.
    Back {
        /// Step to go to. Defaults to the previous one.
        #[arg(value_enum)]
        step: Option<StepArg>,
    },

    /// Summarize the session: step, gates, and list counts.
    Status,

    /// Print the draft as JSON.
    Show,

    /// Publish the draft as a directory profile. Prints the profile ID.
    Complete,

    /// Throw the draft away.
    Discard,
}

/// Field updates for the draft.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// First name (personal step, required to advance).
    #[arg(long)]
    first_name: Option<String>,

    /// Last name (personal step, required to advance).
    #[arg(long)]
    last_name: Option<String>,

    /// Contact email (personal step, required to advance).
    #[arg(long)]
    email: Option<String>,

    /// Date of birth, `YYYY-MM-DD`.
    #[arg(long)]
    date_of_birth: Option<String>,

    /// Location, "City, Country".
    #[arg(long)]
    location: Option<String>,

    /// Photo URL or path.
    #[arg(long)]
    photo: Option<String>,

    /// Primary field (professional step, required to advance).
    #[arg(long)]
    field: Option<String>,

    /// Professional summary (professional step, required to advance).
    #[arg(long)]
    summary: Option<String>,

    /// Short bio.
    #[arg(long)]
    bio: Option<String>,

    /// Career objective.
    #[arg(long)]
    objective: Option<String>,

    /// Phone number.
    #[arg(long)]
    phone: Option<String>,

    /// LinkedIn URL.
    #[arg(long)]
    linkedin: Option<String>,

    /// Portfolio URL.
    #[arg(long)]
    portfolio: Option<String>,

    /// Whether the profile advertises availability for work.
    #[arg(long)]
    open_to_work: Option<bool>,

    /// Preferred employment type.
    #[arg(long, value_enum)]
    employment_type: Option<EmploymentTypeArg>,

    /// Preferred work location.
    #[arg(long, value_enum)]
    work_location: Option<WorkLocationArg>,
}

impl SetArgs {
    fn into_patch(self) -> DraftPatch {
        DraftPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            location: self.location,
            profile_photo: self.photo,
            professional_summary: self.summary,
            short_bio: self.bio,
            career_objective: self.objective,
            primary_field: self.field,
            email: self.email,
            phone: self.phone,
            linkedin: self.linkedin,
            portfolio: self.portfolio,
            open_to_work: self.open_to_work,
            employment_type: self.employment_type.map(|a| a.to_domain()),
            work_location: self.work_location.map(|a| a.to_domain()),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum StageItem {
    /// Merge fields into the experience entry being composed.
    Experience(ExperienceArgs),

    /// Add an achievement to the experience entry being composed.
    Achievement {
        /// Achievement text.
        text: String,
    },

    /// Merge fields into the education entry being composed.
    Education(EducationArgs),
}

#[derive(Debug, Subcommand)]
pub enum AddItem {
    /// Add a skill.
    Skill {
        /// Skill name.
        name: String,

        /// Proficiency level. Defaults to intermediate.
        #[arg(long, value_enum)]
        level: Option<LevelArg>,
    },

    /// Add a tool. Exact duplicates are rejected.
    Tool {
        /// Tool name.
        name: String,
    },

    /// Commit the staged experience entry, merged with any flags given here.
    Experience {
        #[command(flatten)]
        fields: ExperienceArgs,

        /// Achievement to include. Can be given multiple times.
        #[arg(long)]
        achievement: Vec<String>,
    },

    /// Commit the staged education entry, merged with any flags given here.
    Education {
        #[command(flatten)]
        fields: EducationArgs,
    },
}

#[derive(Debug, Args)]
pub struct ExperienceArgs {
    /// Job title (required to commit).
    #[arg(long)]
    job_title: Option<String>,

    /// Company name (required to commit).
    #[arg(long)]
    company: Option<String>,

    /// Start date, `YYYY-MM-DD`.
    #[arg(long)]
    start_date: Option<String>,

    /// End date, `YYYY-MM-DD`, or `Present` for an ongoing role.
    #[arg(long)]
    end_date: Option<String>,

    /// What the role involved.
    #[arg(long)]
    description: Option<String>,
}

impl ExperienceArgs {
    fn into_patch(self) -> ExperiencePatch {
        ExperiencePatch {
            job_title: self.job_title,
            company: self.company,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        }
    }
}

#[derive(Debug, Args)]
pub struct EducationArgs {
    /// Degree or qualification (required to commit).
    #[arg(long)]
    degree: Option<String>,

    /// Institution name (required to commit).
    #[arg(long)]
    institution: Option<String>,

    /// Completion year.
    #[arg(long)]
    year: Option<String>,
}

impl EducationArgs {
    fn into_patch(self) -> EducationPatch {
        EducationPatch {
            institution: self.institution,
            degree: self.degree,
            year_completed: self.year,
        }
    }
}

/// CLI-facing step name, mapped to the domain `Step`.
#[derive(Debug, Clone, ValueEnum)]
pub enum StepArg {
    Personal,
    Professional,
    Experience,
    Education,
    Portfolio,
    Availability,
}

impl StepArg {
    fn to_domain(&self) -> Step {
        match self {
            Self::Personal => Step::Personal,
            Self::Professional => Step::Professional,
            Self::Experience => Step::Experience,
            Self::Education => Step::Education,
            Self::Portfolio => Step::Portfolio,
            Self::Availability => Step::Availability,
        }
    }
}

/// CLI-facing list name, mapped to the domain `ListKind`.
#[derive(Debug, Clone, ValueEnum)]
pub enum ListKindArg {
    Skill,
    Tool,
    Experience,
    Education,
}

impl ListKindArg {
    fn to_domain(&self) -> ListKind {
        match self {
            Self::Skill => ListKind::Skill,
            Self::Tool => ListKind::Tool,
            Self::Experience => ListKind::Experience,
            Self::Education => ListKind::Education,
        }
    }
}

/// CLI-facing skill level, mapped to the domain `SkillLevel`.
#[derive(Debug, Clone, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl LevelArg {
    fn to_domain(&self) -> SkillLevel {
        match self {
            Self::Beginner => SkillLevel::Beginner,
            Self::Intermediate => SkillLevel::Intermediate,
            Self::Advanced => SkillLevel::Advanced,
            Self::Expert => SkillLevel::Expert,
        }
    }
}

/// CLI-facing employment type, mapped to the domain `EmploymentType`.
#[derive(Debug, Clone, ValueEnum)]
pub enum EmploymentTypeArg {
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentTypeArg {
    fn to_domain(&self) -> EmploymentType {
        match self {
            Self::FullTime => EmploymentType::FullTime,
            Self::PartTime => EmploymentType::PartTime,
            Self::Contract => EmploymentType::Contract,
        }
    }
}

/// CLI-facing work location, mapped to the domain `WorkLocation`.
#[derive(Debug, Clone, ValueEnum)]
pub enum WorkLocationArg {
    Remote,
    OnSite,
    Hybrid,
}

impl WorkLocationArg {
    fn to_domain(&self) -> WorkLocation {
        match self {
            Self::Remote => WorkLocation::Remote,
            Self::OnSite => WorkLocation::OnSite,
            Self::Hybrid => WorkLocation::Hybrid,
        }
    }
}

pub(super) fn cmd_start(storage: &Storage) -> Result<(), String> {
    let wizard = Wizard::new();
    storage
        .create_draft(&wizard)
        .map_err(|e| format!("failed to start draft: {e}"))?;

    eprintln!("Draft started — on the personal step");
    Ok(())
}

pub(super) fn cmd_set(storage: &Storage, args: SetArgs) -> Result<(), String> {
    let mut wizard = load_session(storage)?;
    wizard.apply(args.into_patch());
    storage
        .save_draft(&wizard)
        .map_err(|e| format!("failed to save draft: {e}"))
}

pub(super) fn cmd_stage(storage: &Storage, item: StageItem) -> Result<(), String> {
    let mut wizard = load_session(storage)?;

    match item {
        StageItem::Experience(fields) => wizard.stage_experience(fields.into_patch()),
        StageItem::Achievement { text } => {
            if !wizard.stage_achievement(&text) {
                return Err("achievement text cannot be blank".to_string());
            }
        }
        StageItem::Education(fields) => wizard.stage_education(fields.into_patch()),
    }

    storage
        .save_draft(&wizard)
        .map_err(|e| format!("failed to save draft: {e}"))
}

pub(super) fn cmd_add(storage: &Storage, item: AddItem) -> Result<(), String> {
    let mut wizard = load_session(storage)?;

    match item {
        AddItem::Skill { name, level } => {
            let level = level.map_or(SkillLevel::Intermediate, |l| l.to_domain());
            if !wizard.add_skill(&name, level) {
                return Err("skill name cannot be blank".to_string());
            }
        }
        AddItem::Tool { name } => {
            if !wizard.add_tool(&name) {
                return Err(format!("'{name}' is blank or already listed"));
            }
        }
        AddItem::Experience {
            fields,
            achievement,
        } => {
            wizard.stage_experience(fields.into_patch());
            for text in &achievement {
                if !wizard.stage_achievement(text) {
                    return Err("achievement text cannot be blank".to_string());
                }
            }
            if !wizard.add_experience() {
                return Err("an experience entry needs --job-title and --company".to_string());
            }
        }
        AddItem::Education { fields } => {
            wizard.stage_education(fields.into_patch());
            if !wizard.add_education() {
                return Err("an education entry needs --degree and --institution".to_string());
            }
        }
    }

    storage
        .save_draft(&wizard)
        .map_err(|e| format!("failed to save draft: {e}"))
}

pub(super) fn cmd_remove(
    storage: &Storage,
    kind: &ListKindArg,
    index: usize,
) -> Result<(), String> {
    let mut wizard = load_session(storage)?;
    wizard
        .remove_item(kind.to_domain(), index)
        .map_err(|e| e.to_string())?;
    storage
        .save_draft(&wizard)
        .map_err(|e| format!("failed to save draft: {e}"))
}

pub(super) fn cmd_next(storage: &Storage) -> Result<(), String> {
    let mut wizard = load_session(storage)?;
    if wizard.step() == Step::Availability {
        return Err("already on the final step — run `roster draft complete` to publish".to_string());
    }

    let step = wizard.advance().map_err(|e| e.to_string())?;
    storage
        .save_draft(&wizard)
        .map_err(|e| format!("failed to save draft: {e}"))?;

    eprintln!("Now on the {step} step");
    Ok(())
}

pub(super) fn cmd_back(storage: &Storage, step: Option<&StepArg>) -> Result<(), String> {
    let mut wizard = load_session(storage)?;
    let target = match step {
        Some(arg) => arg.to_domain().index(),
        None => wizard
            .step()
            .index()
            .checked_sub(1)
            .ok_or("already on the first step")?,
    };

    let step = wizard.go_to(target).map_err(|e| e.to_string())?;
    storage
        .save_draft(&wizard)
        .map_err(|e| format!("failed to save draft: {e}"))?;

    eprintln!("Now on the {step} step");
    Ok(())
}

pub(super) fn cmd_status(storage: &Storage) -> Result<(), String> {
    let wizard = load_session(storage)?;
    let step = wizard.step();
    println!("Step {} of {} — {step}", step.index() + 1, Step::ALL.len());

    for gated in [Step::Personal, Step::Professional] {
        if wizard.can_advance(gated) {
            println!("{}: met", gated.label());
        } else {
            println!(
                "{}: missing {}",
                gated.label(),
                wizard.missing_fields(gated).join(", ")
            );
        }
    }

    let draft = wizard.draft();
    println!(
        "Skills: {}  Tools: {}  Experience: {}  Education: {}",
        draft.skills.len(),
        draft.tools.len(),
        draft.experience.len(),
        draft.education.len()
    );

    if !wizard.pending_experience().is_blank() {
        println!(
            "Staged experience: {}",
            describe_pending_experience(wizard.pending_experience())
        );
    }
    if !wizard.pending_education().is_blank() {
        let pending = wizard.pending_education();
        println!(
            "Staged education: {} at {}",
            or_unset(&pending.degree),
            or_unset(&pending.institution)
        );
    }

    Ok(())
}

pub(super) fn cmd_show(storage: &Storage) -> Result<(), String> {
    let wizard = load_session(storage)?;
    let json = serde_json::to_string_pretty(wizard.draft())
        .map_err(|e| format!("failed to serialize draft: {e}"))?;

    println!("{json}");
    Ok(())
}

pub(super) fn cmd_complete(storage: &Storage) -> Result<(), String> {
    let wizard = load_session(storage)?;
    let profile = wizard.complete().map_err(|e| e.to_string())?;

    storage
        .add_profile(&profile)
        .map_err(|e| format!("failed to publish profile: {e}"))?;
    storage
        .clear_draft()
        .map_err(|e| format!("failed to clear draft: {e}"))?;

    println!("{}", profile.id);
    eprintln!("Published {}", profile.slug);
    Ok(())
}

pub(super) fn cmd_discard(storage: &Storage) -> Result<(), String> {
    storage
        .clear_draft()
        .map_err(|e| format!("failed to discard draft: {e}"))?;

    eprintln!("Draft discarded");
    Ok(())
}

/// Load the wizard session, turning the missing-draft case into a hint.
fn load_session(storage: &Storage) -> Result<Wizard, String> {
    match storage.load_draft() {
        Ok(wizard) => Ok(wizard),
        Err(StorageError::DraftNotFound) => {
            Err("no draft in progress — start one with `roster draft start`".to_string())
        }
        Err(e) => Err(format!("failed to load draft: {e}")),
    }
}

/// Short human-readable description of the staged experience entry.
fn describe_pending_experience(pending: &PendingExperience) -> String {
    let mut description = format!(
        "{} at {}",
        or_unset(&pending.job_title),
        or_unset(&pending.company)
    );
    if !pending.key_achievements.is_empty() {
        description.push_str(&format!(
            " ({} achievement(s))",
            pending.key_achievements.len()
        ));
    }
    description
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "?" } else { value }
}
