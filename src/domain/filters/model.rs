//! ModelFilter - AI model dimension values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// AI model filter, including the unconstrained `All` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFilter {
    #[default]
    All,
    Gpt4,
    Claude,
    Gemini,
    Llama,
}

impl ModelFilter {
    /// Returns the concrete (non-All) models in chart legend order.
    pub fn concrete() -> &'static [ModelFilter] {
        &[
            ModelFilter::Gpt4,
            ModelFilter::Claude,
            ModelFilter::Gemini,
            ModelFilter::Llama,
        ]
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ModelFilter::All => "all",
            ModelFilter::Gpt4 => "gpt4",
            ModelFilter::Claude => "claude",
            ModelFilter::Gemini => "gemini",
            ModelFilter::Llama => "llama",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelFilter::All => "All Models",
            ModelFilter::Gpt4 => "GPT-4",
            ModelFilter::Claude => "Claude",
            ModelFilter::Gemini => "Gemini",
            ModelFilter::Llama => "Llama",
        }
    }

    /// True when this filter leaves the dimension unconstrained.
    pub fn is_all(&self) -> bool {
        matches!(self, ModelFilter::All)
    }
}

impl fmt::Display for ModelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ModelFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ModelFilter::All),
            "gpt4" => Ok(ModelFilter::Gpt4),
            "claude" => Ok(ModelFilter::Claude),
            "gemini" => Ok(ModelFilter::Gemini),
            "llama" => Ok(ModelFilter::Llama),
            other => Err(ValidationError::unknown_value("model", other)),
        }
    }
}
