//! Directory search over published profiles.
//!
//! One free-text query plus five structured criteria, all AND-ed: a
//! profile appears in the result only if every active clause accepts
//! it. Blank criteria are inactive, so an empty filter is the identity.

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::model::{Experience, Profile, WorkLocation};

/// Sentinel end date for a role that is still held.
const PRESENT: &str = "Present";

/// Years are flat 365-day years; leap days shift totals slightly.
const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// The structured directory criteria. `None` (or an empty string)
/// deactivates a clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub primary_field: Option<String>,
    pub availability: AvailabilityFilter,
    pub location: Option<String>,
    pub experience: Option<ExperienceBucket>,
    pub remote_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityFilter {
    #[default]
    Any,
    Open,
    Closed,
}

/// Experience bands. Contiguous over non-negative totals: every total
/// lands in exactly one band, with whole-number boundaries belonging
/// to the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBucket {
    UpToTwo,
    ThreeToFive,
    SixToTen,
    TenPlus,
}

impl ExperienceBucket {
    pub fn contains(self, years: f64) -> bool {
        match self {
            Self::UpToTwo => (0.0..=2.0).contains(&years),
            Self::ThreeToFive => years > 2.0 && years <= 5.0,
            Self::SixToTen => years > 5.0 && years <= 10.0,
            Self::TenPlus => years > 10.0,
        }
    }
}

/// Applies the query and criteria to a roster, preserving input order.
pub fn filter(
    profiles: &[Profile],
    query: &str,
    criteria: &FilterCriteria,
    now: Timestamp,
) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| matches(profile, query, criteria, now))
        .cloned()
        .collect()
}

/// Total professional experience in years. Each entry contributes its
/// own span; an entry whose dates cannot be read contributes zero, and
/// a backwards span is counted as-is rather than clamped.
pub fn years_of_experience(entries: &[Experience], now: Timestamp) -> f64 {
    entries
        .iter()
        .map(|entry| {
            let start = parse_date(&entry.start_date);
            let end = if entry.end_date == PRESENT {
                Some(now)
            } else {
                parse_date(&entry.end_date)
            };
            match (start, end) {
                (Some(start), Some(end)) => {
                    end.duration_since(start).as_secs_f64() / SECONDS_PER_YEAR
                }
                _ => 0.0,
            }
        })
        .sum()
}

fn matches(profile: &Profile, query: &str, criteria: &FilterCriteria, now: Timestamp) -> bool {
    if !query.is_empty() {
        let needle = query.to_lowercase();
        let name = format!("{} {}", profile.first_name, profile.last_name).to_lowercase();
        let hit = name.contains(&needle)
            || profile.primary_field.to_lowercase().contains(&needle)
            || profile
                .skills
                .iter()
                .any(|skill| skill.name.to_lowercase().contains(&needle))
            || profile
                .tools
                .iter()
                .any(|tool| tool.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    if let Some(field) = criteria.primary_field.as_deref()
        && !field.is_empty()
        && profile.primary_field != field
    {
        return false;
    }

    let open = profile.availability.open_to_work;
    let availability_ok = match criteria.availability {
        AvailabilityFilter::Any => true,
        AvailabilityFilter::Open => open,
        AvailabilityFilter::Closed => !open,
    };
    if !availability_ok {
        return false;
    }

    // Only the city part of a "City, Country" criterion is compared,
    // case-insensitively, against the profile's location.
    if let Some(location) = criteria.location.as_deref()
        && !location.is_empty()
    {
        let city = location.split(',').next().unwrap_or(location).to_lowercase();
        if !profile.location.to_lowercase().contains(&city) {
            return false;
        }
    }

    if let Some(bucket) = criteria.experience
        && !bucket.contains(years_of_experience(&profile.experience, now))
    {
        return false;
    }

    !criteria.remote_only || profile.availability.location == WorkLocation::Remote
}

fn parse_date(value: &str) -> Option<Timestamp> {
    let date = value.parse::<Date>().ok()?;
    let zoned = date.to_zoned(TimeZone::UTC).ok()?;
    Some(zoned.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    use crate::model::{Availability, Skill, SkillLevel};

    /// 2026-01-01T00:00:00Z.
    fn now() -> Timestamp {
        Timestamp::new(1_767_225_600, 0).unwrap()
    }

    fn entry(start: &str, end: &str) -> Experience {
        Experience {
            id: Uuid::new_v4(),
            job_title: "Engineer".into(),
            company: "Example Co".into(),
            start_date: start.into(),
            end_date: end.into(),
            description: String::new(),
            key_achievements: Vec::new(),
        }
    }

    fn profile(first: &str, last: &str, field: &str) -> Profile {
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
            primary_field: field.into(),
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
            created_at: Timestamp::UNIX_EPOCH,
            featured: false,
        }
    }

    #[test]
    fn years_counts_completed_spans() {
        // 2021-01-01 to 2023-01-01 is exactly 730 days.
        let years = years_of_experience(&[entry("2021-01-01", "2023-01-01")], now());
        assert!((years - 2.0).abs() < 1e-9);
    }

    #[test]
    fn years_treats_present_as_now() {
        // 2024-01-01 to 2026-01-01 is 731 days (2024 is a leap year).
        let years = years_of_experience(&[entry("2024-01-01", "Present")], now());
        assert!((years - 731.0 / 365.0).abs() < 1e-9);
    }

    #[test]
    fn years_skips_entries_with_unreadable_dates() {
        let entries = vec![
            entry("started long ago", "2023-01-01"),
            entry("2024-01-01", "present"), // sentinel is capital-P only
            entry("2021-01-01", "2023-01-01"),
        ];
        let years = years_of_experience(&entries, now());
        assert!((years - 2.0).abs() < 1e-9);
    }

    #[test]
    fn years_does_not_clamp_backwards_spans() {
        let years = years_of_experience(&[entry("2023-01-01", "2021-01-01")], now());
        assert!((years + 2.0).abs() < 1e-9);
    }

    #[test]
    fn bucket_boundaries_belong_to_the_lower_band() {
        assert!(ExperienceBucket::UpToTwo.contains(0.0));
        assert!(ExperienceBucket::UpToTwo.contains(2.0));
        assert!(!ExperienceBucket::UpToTwo.contains(2.01));
        assert!(ExperienceBucket::ThreeToFive.contains(2.01));
        assert!(ExperienceBucket::ThreeToFive.contains(5.0));
        assert!(ExperienceBucket::SixToTen.contains(5.01));
        assert!(ExperienceBucket::SixToTen.contains(10.0));
        assert!(ExperienceBucket::TenPlus.contains(10.01));
        assert!(!ExperienceBucket::TenPlus.contains(10.0));
    }

    #[test]
    fn bucket_rejects_negative_totals() {
        assert!(!ExperienceBucket::UpToTwo.contains(-0.5));
    }

    #[test]
    fn experience_criterion_respects_the_boundary() {
        // Exactly 730 days lands on the 2.0 boundary; four more days
        // tips into the next band.
        let mut on_boundary = profile("Jane", "Doe", "Design");
        on_boundary.experience = vec![entry("2021-01-01", "2023-01-01")];
        let mut past_boundary = profile("Sam", "Lee", "Design");
        past_boundary.experience = vec![entry("2021-01-01", "2023-01-05")];
        let profiles = vec![on_boundary.clone(), past_boundary.clone()];

        let criteria = FilterCriteria {
            experience: Some(ExperienceBucket::UpToTwo),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()), vec![on_boundary]);

        let criteria = FilterCriteria {
            experience: Some(ExperienceBucket::ThreeToFive),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()), vec![past_boundary]);
    }

    #[test]
    fn query_searches_name_field_skills_and_tools() {
        let mut jane = profile("Jane", "Doe", "Design");
        jane.skills = vec![Skill {
            name: "TypeScript".into(),
            level: SkillLevel::Advanced,
        }];
        jane.tools = vec!["Figma".into()];
        let profiles = vec![jane];

        for query in ["jane", "DOE", "design", "typescript", "FIGMA"] {
            assert_eq!(filter(&profiles, query, &FilterCriteria::default(), now()).len(), 1);
        }
        assert!(filter(&profiles, "welding", &FilterCriteria::default(), now()).is_empty());
    }

    #[test]
    fn empty_query_and_default_criteria_keep_everything() {
        let profiles = vec![
            profile("Jane", "Doe", "Design"),
            profile("Sam", "Lee", "Engineering"),
        ];
        let result = filter(&profiles, "", &FilterCriteria::default(), now());
        assert_eq!(result, profiles);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut sam = profile("Sam", "Lee", "Engineering");
        sam.availability.open_to_work = false;
        let profiles = vec![profile("Jane", "Doe", "Design"), sam];

        let criteria = FilterCriteria {
            availability: AvailabilityFilter::Open,
            ..FilterCriteria::default()
        };
        let once = filter(&profiles, "doe", &criteria, now());
        let twice = filter(&once, "doe", &criteria, now());
        assert_eq!(once, twice);
    }

    #[test]
    fn field_criterion_is_exact() {
        let profiles = vec![profile("Jane", "Doe", "Design")];

        let criteria = FilterCriteria {
            primary_field: Some("Design".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()).len(), 1);

        // Exact comparison, including case.
        let criteria = FilterCriteria {
            primary_field: Some("design".into()),
            ..FilterCriteria::default()
        };
        assert!(filter(&profiles, "", &criteria, now()).is_empty());

        // An empty string deactivates the clause.
        let criteria = FilterCriteria {
            primary_field: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()).len(), 1);
    }

    #[test]
    fn availability_criterion_splits_open_and_closed() {
        let jane = profile("Jane", "Doe", "Design");
        let mut sam = profile("Sam", "Lee", "Engineering");
        sam.availability.open_to_work = false;
        let profiles = vec![jane.clone(), sam.clone()];

        let criteria = FilterCriteria {
            availability: AvailabilityFilter::Open,
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()), vec![jane]);

        let criteria = FilterCriteria {
            availability: AvailabilityFilter::Closed,
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()), vec![sam]);
    }

    #[test]
    fn location_criterion_compares_the_city_part() {
        let mut jane = profile("Jane", "Doe", "Design");
        jane.location = "San Francisco, USA".into();
        let profiles = vec![jane.clone(), profile("Sam", "Lee", "Engineering")];

        let criteria = FilterCriteria {
            location: Some("San Francisco, USA".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()), vec![jane]);

        let criteria = FilterCriteria {
            location: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()).len(), 2);
    }

    #[test]
    fn remote_only_requires_remote_work_location() {
        let jane = profile("Jane", "Doe", "Design");
        let mut sam = profile("Sam", "Lee", "Engineering");
        sam.availability.location = WorkLocation::Hybrid;
        let profiles = vec![jane.clone(), sam];

        let criteria = FilterCriteria {
            remote_only: true,
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()), vec![jane]);
    }

    #[test]
    fn all_clauses_must_accept() {
        let jane = profile("Jane", "Doe", "Design");
        let mut sam = profile("Sam", "Lee", "Engineering");
        sam.availability.open_to_work = false;
        let profiles = vec![jane.clone(), sam.clone()];

        // Field alone admits Sam.
        let criteria = FilterCriteria {
            primary_field: Some("Engineering".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "", &criteria, now()), vec![sam]);

        // Adding the availability clause removes him too.
        let criteria = FilterCriteria {
            primary_field: Some("Engineering".into()),
            availability: AvailabilityFilter::Open,
            ..FilterCriteria::default()
        };
        assert!(filter(&profiles, "", &criteria, now()).is_empty());

        // Query and criteria combine the same way.
        let criteria = FilterCriteria {
            primary_field: Some("Design".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&profiles, "doe", &criteria, now()), vec![jane]);
    }
}
