//! Profile types: the records the directory serves.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published profile as it appears in the directory.
///
/// Serialized with camelCase keys, one JSON document per profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,

    /// URL-friendly handle derived from the lower-cased first and last name.
    pub slug: String,

    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub location: String,
    pub profile_photo: String,
    pub professional_summary: String,
    pub short_bio: String,
    pub career_objective: String,
    pub primary_field: String,
    pub skills: Vec<Skill>,
    pub tools: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub availability: Availability,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub created_at: Timestamp,

    /// Picked for the featured rail. Absent in documents written before
    /// the flag existed, so it defaults off.
    #[serde(default)]
    pub featured: bool,
}

/// A named skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

/// Proficiency on a closed four-point scale. Never freeform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// One work-history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,

    /// Calendar date, `YYYY-MM-DD`.
    pub start_date: String,

    /// Calendar date, or the exact sentinel `Present` for an ongoing role.
    pub end_date: String,

    pub description: String,
    pub key_achievements: Vec<String>,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub year_completed: String,
}

/// A certification or award.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub url: Option<String>,
}

/// A portfolio project with optional outbound links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub links: Vec<ProjectLink>,
}

/// A labeled link on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// Hiring availability. Defaults to open, full-time, remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub open_to_work: bool,

    #[serde(rename = "type")]
    pub employment_type: EmploymentType,

    pub location: WorkLocation,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            open_to_work: true,
            employment_type: EmploymentType::FullTime,
            location: WorkLocation::Remote,
        }
    }
}

/// The kind of engagement a person is looking for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full time",
            Self::PartTime => "Part time",
            Self::Contract => "Contract",
        }
    }
}

/// Where the person works from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkLocation {
    #[default]
    Remote,
    OnSite,
    Hybrid,
}

impl WorkLocation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::OnSite => "On site",
            Self::Hybrid => "Hybrid",
        }
    }
}
