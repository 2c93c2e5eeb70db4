//! Persona profile aggregate - audience segments scored against the
//! brand guideline checklist.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::analysis::{check_coverage, completeness, guideline_points, GuidelineCoverage};
use crate::domain::filters::toggle_all_sentinel;
use crate::domain::foundation::{Percentage, PersonaId, ValidationError};

/// Sentinel entry for the geography multi-select.
pub const ALL_GEOGRAPHIES: &str = "All Geographies";

/// An audience persona the brand is tracked against.
///
/// The completeness score is derived from the description and
/// recomputed whenever the description changes; it is never set
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    id: PersonaId,
    name: String,
    description: String,
    geographies: Vec<String>,
    completeness: Percentage,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PersonaProfile {
    /// Creates a new persona profile.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        geographies: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let description = description.into();
        let completeness = completeness(&description, &guideline_points());
        let now = Utc::now();

        Ok(Self {
            id: PersonaId::new(),
            name,
            description,
            geographies,
            completeness,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> PersonaId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn geographies(&self) -> &[String] {
        &self.geographies
    }

    /// Share of guideline points the description covers.
    pub fn completeness(&self) -> Percentage {
        self.completeness
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the profile.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replaces the description and recomputes completeness.
    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.completeness = completeness(&self.description, &guideline_points());
        self.touch();
    }

    /// Toggles a region in the geography multi-select, honoring the
    /// all-sentinel rule.
    pub fn select_geography(&mut self, region: &str) {
        self.geographies = toggle_all_sentinel(
            &self.geographies,
            region.to_string(),
            &ALL_GEOGRAPHIES.to_string(),
        );
        self.touch();
    }

    /// Per-point coverage of the current description, in checklist
    /// order.
    pub fn coverage(&self) -> Vec<GuidelineCoverage> {
        check_coverage(&self.description, &guideline_points())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
