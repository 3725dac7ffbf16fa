//! Core data model for Roster.
//!
//! Profiles as they appear in the directory, and the draft state a
//! profile is authored from.

mod draft;
mod profile;

pub use draft::{DraftPatch, ProfileDraft};
pub use profile::{
    Availability, Certification, Education, EmploymentType, Experience, Profile, Project,
    ProjectLink, Skill, SkillLevel, WorkLocation,
};
