//! The profile wizard: a fixed, linear authoring flow.
//!
//! Six steps, walked one at a time. Earlier steps may always be
//! revisited; moving forward is gated on the current step's mandatory
//! fields. The wizard owns the draft plus the scratch entries being
//! composed for the draft's lists, and the whole thing serializes so a
//! session survives between invocations.

use std::fmt;
use std::mem;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{DraftPatch, Education, Experience, Profile, ProfileDraft, Skill, SkillLevel};

/// Errors from wizard operations. Gate failures are expected flow
/// control; the rest are caller errors.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("the {} step needs {}", step, missing.join(", "))]
    GateUnmet { step: Step, missing: Vec<&'static str> },

    #[error("step index {0} is out of range")]
    InvalidStep(usize),

    #[error("cannot skip ahead from the {from} step to the {to} step")]
    SkippedAhead { from: Step, to: Step },

    #[error("no {kind} at index {index} (the list has {len})")]
    IndexOutOfRange {
        kind: ListKind,
        index: usize,
        len: usize,
    },

    #[error("profile is not ready: {0}")]
    IncompleteProfile(String),
}

pub type Result<T> = core::result::Result<T, WizardError>;

/// The authoring steps, in walking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Personal,
    Professional,
    Experience,
    Education,
    Portfolio,
    Availability,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Personal,
        Step::Professional,
        Step::Experience,
        Step::Education,
        Step::Portfolio,
        Step::Availability,
    ];

    /// Position in the flow, 0-based.
    pub fn index(self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Professional => 1,
            Self::Experience => 2,
            Self::Education => 3,
            Self::Portfolio => 4,
            Self::Availability => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Title-case label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Professional => "Professional",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Portfolio => "Portfolio",
            Self::Availability => "Availability",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Professional => "professional",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Portfolio => "portfolio",
            Self::Availability => "availability",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the draft's lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Skill,
    Tool,
    Experience,
    Education,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Skill => "skill",
            Self::Tool => "tool",
            Self::Experience => "experience",
            Self::Education => "education",
        })
    }
}

/// An experience entry under composition, before it is committed to
/// the draft. Achievements accumulate here one at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingExperience {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub key_achievements: Vec<String>,
}

impl PendingExperience {
    pub fn is_blank(&self) -> bool {
        self.job_title.is_empty()
            && self.company.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
            && self.description.is_empty()
            && self.key_achievements.is_empty()
    }
}

/// A partial update to the pending experience entry.
#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// An education entry under composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEducation {
    pub institution: String,
    pub degree: String,
    pub year_completed: String,
}

impl PendingEducation {
    pub fn is_blank(&self) -> bool {
        self.institution.is_empty() && self.degree.is_empty() && self.year_completed.is_empty()
    }
}

/// A partial update to the pending education entry.
#[derive(Debug, Clone, Default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub year_completed: Option<String>,
}

/// The wizard session: current step, the draft, and the scratch
/// entries. Serialized wholesale so a session persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wizard {
    step: Step,
    draft: ProfileDraft,
    pending_experience: PendingExperience,
    pending_education: PendingEducation,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Personal,
            draft: ProfileDraft::default(),
            pending_experience: PendingExperience::default(),
            pending_education: PendingEducation::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn pending_experience(&self) -> &PendingExperience {
        &self.pending_experience
    }

    pub fn pending_education(&self) -> &PendingEducation {
        &self.pending_education
    }

    // ── Fields and gates ──

    /// Shallow-merges a field update into the draft. Never validates;
    /// gates are checked only on advancement and completion.
    pub fn apply(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    /// The step's mandatory fields still blank after trimming. Only the
    /// personal and professional steps have gates; every other step
    /// returns an empty list.
    pub fn missing_fields(&self, step: Step) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            Step::Personal => {
                if self.draft.first_name.trim().is_empty() {
                    missing.push("first name");
                }
                if self.draft.last_name.trim().is_empty() {
                    missing.push("last name");
                }
                if self.draft.email.trim().is_empty() {
                    missing.push("email");
                }
            }
            Step::Professional => {
                if self.draft.primary_field.trim().is_empty() {
                    missing.push("primary field");
                }
                if self.draft.professional_summary.trim().is_empty() {
                    missing.push("professional summary");
                }
            }
            Step::Experience | Step::Education | Step::Portfolio | Step::Availability => {}
        }
        missing
    }

    pub fn can_advance(&self, step: Step) -> bool {
        self.missing_fields(step).is_empty()
    }

    // ── Navigation ──

    /// Moves to the given step index. Backward moves (and staying put)
    /// are unconditional; the immediate next step requires the current
    /// gate; anything further ahead is rejected.
    pub fn go_to(&mut self, target: usize) -> Result<Step> {
        let Some(step) = Step::from_index(target) else {
            return Err(WizardError::InvalidStep(target));
        };
        if target <= self.step.index() {
            self.step = step;
            return Ok(step);
        }
        if target > self.step.index() + 1 {
            return Err(WizardError::SkippedAhead {
                from: self.step,
                to: step,
            });
        }
        let missing = self.missing_fields(self.step);
        if !missing.is_empty() {
            return Err(WizardError::GateUnmet {
                step: self.step,
                missing,
            });
        }
        self.step = step;
        Ok(step)
    }

    pub fn advance(&mut self) -> Result<Step> {
        self.go_to(self.step.index() + 1)
    }

    // ── List entries ──

    /// Adds a skill. Rejects a name that is blank after trimming; an
    /// accepted name is stored with its original spelling.
    pub fn add_skill(&mut self, name: &str, level: SkillLevel) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.draft.skills.push(Skill {
            name: name.to_string(),
            level,
        });
        true
    }

    /// Adds a tool. Rejects blank names and exact duplicates; the
    /// comparison is case-sensitive, so "Figma" and "figma" coexist.
    pub fn add_tool(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.draft.tools.iter().any(|t| t == name) {
            return false;
        }
        self.draft.tools.push(name.to_string());
        true
    }

    /// Merges fields into the pending experience entry.
    pub fn stage_experience(&mut self, patch: ExperiencePatch) {
        let pending = &mut self.pending_experience;
        merge(&mut pending.job_title, patch.job_title);
        merge(&mut pending.company, patch.company);
        merge(&mut pending.start_date, patch.start_date);
        merge(&mut pending.end_date, patch.end_date);
        merge(&mut pending.description, patch.description);
    }

    /// Stages an achievement on the pending experience entry. Rejects
    /// blank text.
    pub fn stage_achievement(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.pending_experience
            .key_achievements
            .push(text.to_string());
        true
    }

    /// Commits the pending experience entry to the draft, assigning it
    /// a fresh id and resetting the scratch state. Rejects (leaving the
    /// scratch state intact) unless job title and company are both set.
    pub fn add_experience(&mut self) -> bool {
        if self.pending_experience.job_title.is_empty() || self.pending_experience.company.is_empty()
        {
            return false;
        }
        let pending = mem::take(&mut self.pending_experience);
        self.draft.experience.push(Experience {
            id: Uuid::new_v4(),
            job_title: pending.job_title,
            company: pending.company,
            start_date: pending.start_date,
            end_date: pending.end_date,
            description: pending.description,
            key_achievements: pending.key_achievements,
        });
        true
    }

    /// Merges fields into the pending education entry.
    pub fn stage_education(&mut self, patch: EducationPatch) {
        let pending = &mut self.pending_education;
        merge(&mut pending.institution, patch.institution);
        merge(&mut pending.degree, patch.degree);
        merge(&mut pending.year_completed, patch.year_completed);
    }

    /// Commits the pending education entry. Rejects unless degree and
    /// institution are both set.
    pub fn add_education(&mut self) -> bool {
        if self.pending_education.degree.is_empty() || self.pending_education.institution.is_empty()
        {
            return false;
        }
        let pending = mem::take(&mut self.pending_education);
        self.draft.education.push(Education {
            id: Uuid::new_v4(),
            institution: pending.institution,
            degree: pending.degree,
            year_completed: pending.year_completed,
        });
        true
    }

    /// Removes a list entry by position. No clamping: an index past the
    /// end is a caller error.
    pub fn remove_item(&mut self, kind: ListKind, index: usize) -> Result<()> {
        let len = match kind {
            ListKind::Skill => self.draft.skills.len(),
            ListKind::Tool => self.draft.tools.len(),
            ListKind::Experience => self.draft.experience.len(),
            ListKind::Education => self.draft.education.len(),
        };
        if index >= len {
            return Err(WizardError::IndexOutOfRange { kind, index, len });
        }
        match kind {
            ListKind::Skill => {
                self.draft.skills.remove(index);
            }
            ListKind::Tool => {
                self.draft.tools.remove(index);
            }
            ListKind::Experience => {
                self.draft.experience.remove(index);
            }
            ListKind::Education => {
                self.draft.education.remove(index);
            }
        }
        Ok(())
    }

    // ── Completion ──

    /// Seals the draft into a published profile: slug from the
    /// lower-cased names, fresh id, creation time stamped now.
    ///
    /// Requires the final step, and re-validates the personal and
    /// professional gates at call time — fields cleared after those
    /// steps were passed still block completion. Does not transition;
    /// the caller decides what happens to the session afterward.
    pub fn complete(&self) -> Result<Profile> {
        if self.step != Step::Availability {
            return Err(WizardError::IncompleteProfile(format!(
                "still on the {} step",
                self.step
            )));
        }
        let mut missing = self.missing_fields(Step::Personal);
        missing.extend(self.missing_fields(Step::Professional));
        if !missing.is_empty() {
            return Err(WizardError::IncompleteProfile(format!(
                "missing {}",
                missing.join(", ")
            )));
        }
        let slug = format!(
            "{}-{}",
            self.draft.first_name.to_lowercase(),
            self.draft.last_name.to_lowercase()
        );
        Ok(self.draft.seal(Uuid::new_v4(), slug, Timestamp::now()))
    }
}

fn merge(field: &mut String, update: Option<String>) {
    if let Some(value) = update {
        *field = value;
    }
}
