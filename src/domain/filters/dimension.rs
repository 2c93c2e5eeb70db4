//! Dimension enum naming the four filterable facets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The facets a dashboard selection can constrain.
///
/// `all()` doubles as the canonical composition order for
/// cross-dimension influence factors: model, then persona, then
/// geography, then intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Model,
    Persona,
    Geography,
    Intent,
}

impl Dimension {
    /// Returns all dimensions in canonical order.
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Model,
            Dimension::Persona,
            Dimension::Geography,
            Dimension::Intent,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Model => "Model",
            Dimension::Persona => "Persona",
            Dimension::Geography => "Geography",
            Dimension::Intent => "Intent",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
