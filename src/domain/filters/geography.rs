//! GeographyFilter - region dimension values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Region filter, including the unconstrained `All` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeographyFilter {
    #[default]
    All,
    Na,
    Eu,
    Apac,
    Latam,
    Me,
    Africa,
}

impl GeographyFilter {
    /// Returns the concrete (non-All) regions in table order.
    pub fn concrete() -> &'static [GeographyFilter] {
        &[
            GeographyFilter::Na,
            GeographyFilter::Eu,
            GeographyFilter::Apac,
            GeographyFilter::Latam,
            GeographyFilter::Me,
            GeographyFilter::Africa,
        ]
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            GeographyFilter::All => "all",
            GeographyFilter::Na => "na",
            GeographyFilter::Eu => "eu",
            GeographyFilter::Apac => "apac",
            GeographyFilter::Latam => "latam",
            GeographyFilter::Me => "me",
            GeographyFilter::Africa => "africa",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GeographyFilter::All => "All Geographies",
            GeographyFilter::Na => "North America",
            GeographyFilter::Eu => "Europe",
            GeographyFilter::Apac => "Asia Pacific",
            GeographyFilter::Latam => "Latin America",
            GeographyFilter::Me => "Middle East",
            GeographyFilter::Africa => "Africa",
        }
    }

    /// True when this filter leaves the dimension unconstrained.
    pub fn is_all(&self) -> bool {
        matches!(self, GeographyFilter::All)
    }
}

impl fmt::Display for GeographyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GeographyFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(GeographyFilter::All),
            "na" => Ok(GeographyFilter::Na),
            "eu" => Ok(GeographyFilter::Eu),
            "apac" => Ok(GeographyFilter::Apac),
            "latam" => Ok(GeographyFilter::Latam),
            "me" => Ok(GeographyFilter::Me),
            "africa" => Ok(GeographyFilter::Africa),
            other => Err(ValidationError::unknown_value("geography", other)),
        }
    }
}
