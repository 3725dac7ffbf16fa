//! Output formatting for CLI display.

use jiff::Timestamp;

use crate::directory;
use crate::model::{Availability, Profile};

/// One directory line: short ID, name, field, city, and experience.
pub(super) fn profile_line(profile: &Profile, now: Timestamp) -> String {
    let short_id = &profile.id.to_string()[..8];
    let mut line = format!(
        "{short_id}  {} {}  [{}]",
        profile.first_name, profile.last_name, profile.primary_field
    );

    let city = headline_location(&profile.location);
    if !city.is_empty() {
        line.push_str(&format!("  [{city}]"));
    }

    let years = directory::years_of_experience(&profile.experience, now);
    line.push_str(&format!("  {}", years_label(years)));

    if profile.availability.open_to_work {
        line.push_str("  available");
    }
    if profile.featured {
        line.push_str("  featured");
    }

    line
}

/// Full profile view, one string per output line.
pub(super) fn profile_detail(profile: &Profile, now: Timestamp) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {} ({})",
            profile.first_name, profile.last_name, profile.slug
        ),
        profile.primary_field.clone(),
    ];
    if !profile.location.is_empty() {
        lines.push(profile.location.clone());
    }
    lines.push(format!("Member since {}", member_since(profile.created_at)));

    let years = directory::years_of_experience(&profile.experience, now);
    if years.round() >= 1.0 {
        lines.push(format!("{}+ years of experience", years.round()));
    }
    lines.push(availability_line(&profile.availability));

    if !profile.professional_summary.is_empty() {
        lines.push(String::new());
        lines.push(profile.professional_summary.clone());
    }
    if !profile.short_bio.is_empty() {
        lines.push(String::new());
        lines.push(profile.short_bio.clone());
    }
    if !profile.career_objective.is_empty() {
        lines.push(String::new());
        lines.push(format!("Objective: {}", profile.career_objective));
    }

    if !profile.skills.is_empty() {
        lines.push(String::new());
        lines.push("Skills:".to_string());
        for skill in &profile.skills {
            lines.push(format!("  {} ({})", skill.name, skill.level.label()));
        }
    }
    if !profile.tools.is_empty() {
        lines.push(String::new());
        lines.push("Tools:".to_string());
        for tool in &profile.tools {
            lines.push(format!("  {tool}"));
        }
    }
    if !profile.experience.is_empty() {
        lines.push(String::new());
        lines.push("Experience:".to_string());
        for entry in &profile.experience {
            lines.push(format!(
                "  {} at {} ({} to {})",
                entry.job_title, entry.company, entry.start_date, entry.end_date
            ));
            if !entry.description.is_empty() {
                lines.push(format!("    {}", entry.description));
            }
            for achievement in &entry.key_achievements {
                lines.push(format!("    - {achievement}"));
            }
        }
    }
    if !profile.education.is_empty() {
        lines.push(String::new());
        lines.push("Education:".to_string());
        for entry in &profile.education {
            let mut line = format!("  {}, {}", entry.degree, entry.institution);
            if !entry.year_completed.is_empty() {
                line.push_str(&format!(" ({})", entry.year_completed));
            }
            lines.push(line);
        }
    }
    if !profile.certifications.is_empty() {
        lines.push(String::new());
        lines.push("Certifications:".to_string());
        for cert in &profile.certifications {
            let mut line = format!("  {} ({}", cert.name, cert.issuer);
            if !cert.year.is_empty() {
                line.push_str(&format!(", {}", cert.year));
            }
            line.push(')');
            lines.push(line);
        }
    }
    if !profile.projects.is_empty() {
        lines.push(String::new());
        lines.push("Projects:".to_string());
        for project in &profile.projects {
            lines.push(format!("  {}", project.title));
            if !project.description.is_empty() {
                lines.push(format!("    {}", project.description));
            }
            for link in &project.links {
                lines.push(format!("    {}: {}", link.label, link.url));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("Contact: {}", profile.email));
    if let Some(phone) = &profile.phone {
        lines.push(format!("Phone: {phone}"));
    }
    if let Some(linkedin) = &profile.linkedin {
        lines.push(format!("LinkedIn: {linkedin}"));
    }
    if let Some(portfolio) = &profile.portfolio {
        lines.push(format!("Portfolio: {portfolio}"));
    }

    lines
}

/// Experience label shown on directory lines: the rounded total, or
/// "Entry Level" when it rounds below one.
pub(super) fn years_label(years: f64) -> String {
    let rounded = years.round();
    if rounded < 1.0 {
        "Entry Level".to_string()
    } else {
        format!("{rounded}+ yrs")
    }
}

/// The city part of a "City, Country" location.
pub(super) fn headline_location(location: &str) -> &str {
    location.split(',').next().unwrap_or(location)
}

/// "Member since" label: abbreviated month and year.
pub(super) fn member_since(created_at: Timestamp) -> String {
    created_at.strftime("%b %Y").to_string()
}

fn availability_line(availability: &Availability) -> String {
    if availability.open_to_work {
        format!(
            "Open to work: {}, {}",
            availability.employment_type.label().to_lowercase(),
            availability.location.label().to_lowercase()
        )
    } else {
        "Not open to work".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    use crate::model::{Experience, Skill, SkillLevel, WorkLocation};

    /// 2026-01-01T00:00:00Z.
    fn now() -> Timestamp {
        Timestamp::new(1_767_225_600, 0).unwrap()
    }

    fn sample_profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            slug: "ada-lovelace".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: String::new(),
            location: "London, UK".into(),
            profile_photo: String::new(),
            professional_summary: "Analytical engines, end to end.".into(),
            short_bio: String::new(),
            career_objective: String::new(),
            primary_field: "Engineering".into(),
            skills: Vec::new(),
            tools: Vec::new(),
            experience: vec![Experience {
                id: Uuid::new_v4(),
                job_title: "Engineer".into(),
                company: "Analytical Engines Ltd".into(),
                start_date: "2021-01-01".into(),
                end_date: "2023-01-01".into(),
                description: String::new(),
                key_achievements: Vec::new(),
            }],
            education: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
            availability: Availability::default(),
            email: "ada@example.com".into(),
            phone: None,
            linkedin: None,
            portfolio: None,
            // 2024-01-01T00:00:00Z.
            created_at: Timestamp::new(1_704_067_200, 0).unwrap(),
            featured: false,
        }
    }

    #[test]
    fn years_label_rounds_to_whole_years() {
        assert_eq!(years_label(0.4), "Entry Level");
        assert_eq!(years_label(0.6), "1+ yrs");
        assert_eq!(years_label(2.0), "2+ yrs");
        assert_eq!(years_label(2.6), "3+ yrs");
    }

    #[test]
    fn headline_location_takes_the_city_part() {
        assert_eq!(headline_location("San Francisco, USA"), "San Francisco");
        assert_eq!(headline_location("Singapore"), "Singapore");
        assert_eq!(headline_location(""), "");
    }

    #[test]
    fn member_since_abbreviates_month_and_year() {
        let created = Timestamp::new(1_704_067_200, 0).unwrap();
        assert_eq!(member_since(created), "Jan 2024");
    }

    #[test]
    fn profile_line_shows_identity_and_availability() {
        let profile = sample_profile();
        let line = profile_line(&profile, now());

        assert!(line.starts_with(&profile.id.to_string()[..8]));
        assert!(line.contains("Ada Lovelace"));
        assert!(line.contains("[Engineering]"));
        assert!(line.contains("[London]"));
        assert!(line.contains("2+ yrs"));
        assert!(line.contains("available"));
        assert!(!line.contains("featured"));
    }

    #[test]
    fn profile_line_marks_featured_profiles() {
        let mut profile = sample_profile();
        profile.featured = true;

        assert!(profile_line(&profile, now()).contains("featured"));
    }

    #[test]
    fn profile_detail_renders_sections() {
        let mut profile = sample_profile();
        profile.skills = vec![Skill {
            name: "Mathematics".into(),
            level: SkillLevel::Expert,
        }];
        profile.tools = vec!["Difference Engine".into()];

        let lines = profile_detail(&profile, now());

        assert_eq!(lines[0], "Ada Lovelace (ada-lovelace)");
        assert!(lines.contains(&"Member since Jan 2024".to_string()));
        assert!(lines.contains(&"2+ years of experience".to_string()));
        assert!(lines.contains(&"Open to work: full time, remote".to_string()));
        assert!(lines.contains(&"  Mathematics (Expert)".to_string()));
        assert!(lines.contains(&"  Difference Engine".to_string()));
        assert!(lines.contains(&"Contact: ada@example.com".to_string()));
    }

    #[test]
    fn profile_detail_closed_availability() {
        let mut profile = sample_profile();
        profile.availability.open_to_work = false;
        profile.availability.location = WorkLocation::OnSite;

        let lines = profile_detail(&profile, now());
        assert!(lines.contains(&"Not open to work".to_string()));
    }
}
