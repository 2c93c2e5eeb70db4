//! IntentFilter - query intent dimension values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Query intent filter, including the unconstrained `All` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentFilter {
    #[default]
    All,
    Comparison,
    Feature,
    Pricing,
    Support,
    Integration,
}

impl IntentFilter {
    /// Returns the concrete (non-All) intents in table order.
    pub fn concrete() -> &'static [IntentFilter] {
        &[
            IntentFilter::Comparison,
            IntentFilter::Feature,
            IntentFilter::Pricing,
            IntentFilter::Support,
            IntentFilter::Integration,
        ]
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            IntentFilter::All => "all",
            IntentFilter::Comparison => "comparison",
            IntentFilter::Feature => "feature",
            IntentFilter::Pricing => "pricing",
            IntentFilter::Support => "support",
            IntentFilter::Integration => "integration",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            IntentFilter::All => "All Intents",
            IntentFilter::Comparison => "Product Comparison",
            IntentFilter::Feature => "Feature Inquiry",
            IntentFilter::Pricing => "Pricing Questions",
            IntentFilter::Support => "Technical Support",
            IntentFilter::Integration => "Integration Help",
        }
    }

    /// True when this filter leaves the dimension unconstrained.
    pub fn is_all(&self) -> bool {
        matches!(self, IntentFilter::All)
    }
}

impl fmt::Display for IntentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for IntentFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(IntentFilter::All),
            "comparison" => Ok(IntentFilter::Comparison),
            "feature" => Ok(IntentFilter::Feature),
            "pricing" => Ok(IntentFilter::Pricing),
            "support" => Ok(IntentFilter::Support),
            "integration" => Ok(IntentFilter::Integration),
            other => Err(ValidationError::unknown_value("intent", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_id() {
        for intent in IntentFilter::concrete() {
            assert_eq!(intent.id().parse::<IntentFilter>().unwrap(), *intent);
        }
    }

    #[test]
    fn rejects_unknown_intent() {
        assert!("troubleshooting".parse::<IntentFilter>().is_err());
    }
}
