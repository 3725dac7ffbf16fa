//! Draft types: a profile while it is still being authored.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::{
    Availability, Certification, Education, EmploymentType, Experience, Profile, Project, Skill,
    WorkLocation,
};

/// An in-progress profile. Scalar fields hold the empty string until
/// provided; nothing is mandatory until the step that gates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
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
    pub phone: String,
    pub linkedin: String,
    pub portfolio: String,
}

impl ProfileDraft {
    /// Merges the patch into the draft. No validation here; gates check
    /// the result only when the wizard tries to advance or complete.
    pub fn apply(&mut self, patch: DraftPatch) {
        merge(&mut self.first_name, patch.first_name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.date_of_birth, patch.date_of_birth);
        merge(&mut self.location, patch.location);
        merge(&mut self.profile_photo, patch.profile_photo);
        merge(&mut self.professional_summary, patch.professional_summary);
        merge(&mut self.short_bio, patch.short_bio);
        merge(&mut self.career_objective, patch.career_objective);
        merge(&mut self.primary_field, patch.primary_field);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.linkedin, patch.linkedin);
        merge(&mut self.portfolio, patch.portfolio);
        if let Some(open) = patch.open_to_work {
            self.availability.open_to_work = open;
        }
        if let Some(employment_type) = patch.employment_type {
            self.availability.employment_type = employment_type;
        }
        if let Some(location) = patch.work_location {
            self.availability.location = location;
        }
    }

    /// Builds the published record. The caller supplies identity, slug,
    /// and creation time; everything else carries over as entered, with
    /// empty contact extras dropped to `None`.
    pub fn seal(&self, id: Uuid, slug: String, created_at: Timestamp) -> Profile {
        Profile {
            id,
            slug,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            location: self.location.clone(),
            profile_photo: self.profile_photo.clone(),
            professional_summary: self.professional_summary.clone(),
            short_bio: self.short_bio.clone(),
            career_objective: self.career_objective.clone(),
            primary_field: self.primary_field.clone(),
            skills: self.skills.clone(),
            tools: self.tools.clone(),
            experience: self.experience.clone(),
            education: self.education.clone(),
            certifications: self.certifications.clone(),
            projects: self.projects.clone(),
            availability: self.availability.clone(),
            email: self.email.clone(),
            phone: optional(&self.phone),
            linkedin: optional(&self.linkedin),
            portfolio: optional(&self.portfolio),
            created_at,
            featured: false,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A shallow update to the draft's scalar fields.
///
/// `None` leaves a field untouched; `Some("")` clears it. List fields
/// are managed through their own add/remove operations, never patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub professional_summary: Option<String>,
    pub short_bio: Option<String>,
    pub career_objective: Option<String>,
    pub primary_field: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub open_to_work: Option<bool>,
    pub employment_type: Option<EmploymentType>,
    pub work_location: Option<WorkLocation>,
}

fn merge(field: &mut String, update: Option<String>) {
    if let Some(value) = update {
        *field = value;
    }
}
