//! Built-in reference lists for profile authoring.
//!
//! These seed the field and location choices shown to authors. Both
//! lists are advisory — the wizard stores whatever string it is given —
//! and either can be overridden in `~/.roster/config.toml`.

pub const PRIMARY_FIELDS: &[&str] = &[
    "Engineering",
    "Design",
    "Product",
    "Data Science",
    "Marketing",
    "Operations",
    "Finance",
    "Education",
    "Healthcare",
    "Legal",
];

pub const LOCATIONS: &[&str] = &[
    "San Francisco, USA",
    "New York, USA",
    "Austin, USA",
    "Toronto, Canada",
    "London, UK",
    "Berlin, Germany",
    "Paris, France",
    "Amsterdam, Netherlands",
    "Sydney, Australia",
    "Tokyo, Japan",
    "Singapore",
];
