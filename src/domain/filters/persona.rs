//! PersonaFilter - audience persona dimension values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Audience persona filter, including the unconstrained `All` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaFilter {
    #[default]
    All,
    Tech,
    Business,
    Developer,
}

impl PersonaFilter {
    /// Returns the concrete (non-All) personas in chart legend order.
    pub fn concrete() -> &'static [PersonaFilter] {
        &[
            PersonaFilter::Tech,
            PersonaFilter::Business,
            PersonaFilter::Developer,
        ]
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            PersonaFilter::All => "all",
            PersonaFilter::Tech => "tech",
            PersonaFilter::Business => "business",
            PersonaFilter::Developer => "developer",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaFilter::All => "All Personas",
            PersonaFilter::Tech => "Tech Enthusiast",
            PersonaFilter::Business => "Business Executive",
            PersonaFilter::Developer => "Developer",
        }
    }

    /// True when this filter leaves the dimension unconstrained.
    pub fn is_all(&self) -> bool {
        matches!(self, PersonaFilter::All)
    }
}

impl fmt::Display for PersonaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PersonaFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PersonaFilter::All),
            "tech" => Ok(PersonaFilter::Tech),
            "business" => Ok(PersonaFilter::Business),
            "developer" => Ok(PersonaFilter::Developer),
            other => Err(ValidationError::unknown_value("persona", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_id() {
        for persona in PersonaFilter::concrete() {
            assert_eq!(persona.id().parse::<PersonaFilter>().unwrap(), *persona);
        }
    }

    #[test]
    fn rejects_unknown_persona() {
        let err = "student".parse::<PersonaFilter>().unwrap_err();
        assert_eq!(format!("{}", err), "Unknown persona value 'student'");
    }
}
