//! Guideline coverage scoring for persona descriptions.
//!
//! Matching is purely lexical: a guideline point counts as covered when
//! the description contains the point itself or its whitespace-stripped
//! form, case-insensitively. No stemming, no semantics.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// Demographic guideline points a persona description should address.
pub const DEMOGRAPHIC_POINTS: &[&str] = &[
    "Age",
    "Job Title",
    "Gender",
    "Married",
    "Location",
    "Education",
    "Career Path",
];

/// Behavioral guideline points a persona description should address.
pub const BEHAVIORAL_POINTS: &[&str] = &[
    "Goals",
    "Pain Points",
    "Personal Interests",
    "Online Behavior",
    "Preferred Contact Form",
];

/// All guideline points, demographic first.
pub fn guideline_points() -> Vec<&'static str> {
    DEMOGRAPHIC_POINTS
        .iter()
        .chain(BEHAVIORAL_POINTS.iter())
        .copied()
        .collect()
}

/// Coverage verdict for a single guideline point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineCoverage {
    pub point: &'static str,
    pub covered: bool,
}

/// Checks which guideline points a free-text description mentions.
pub fn check_coverage(text: &str, points: &[&'static str]) -> Vec<GuidelineCoverage> {
    let haystack = text.to_lowercase();
    points
        .iter()
        .map(|&point| {
            let needle = point.to_lowercase();
            let compact: String = needle.split_whitespace().collect();
            let covered = haystack.contains(&needle) || haystack.contains(&compact);
            GuidelineCoverage { point, covered }
        })
        .collect()
}

/// Share of guideline points the description covers, as a rounded
/// whole percentage.
///
/// # Panics
/// Panics when `points` is empty. The guideline lists are fixed
/// non-empty constants, so an empty list is a caller bug rather than a
/// data condition.
pub fn completeness(text: &str, points: &[&'static str]) -> Percentage {
    assert!(
        !points.is_empty(),
        "completeness requires at least one guideline point"
    );
    let covered = check_coverage(text, points)
        .iter()
        .filter(|coverage| coverage.covered)
        .count();
    Percentage::from_ratio(covered, points.len())
}
