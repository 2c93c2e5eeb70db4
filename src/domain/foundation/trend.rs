//! Trend delta value object for period-over-period movement.

use serde::{Serialize, Serializer};
use std::fmt;

use super::MetricKind;

/// Direction of a trend delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Unit a trend delta is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendUnit {
    /// Relative change, displayed as "+5.2%".
    Percent,
    /// Absolute change on the metric's own scale, displayed as "-0.4".
    Absolute,
}

/// A signed period-over-period change displayed next to a metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendDelta {
    value: f64,
    unit: TrendUnit,
}

impl TrendDelta {
    /// Creates a relative (percent) trend delta.
    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: TrendUnit::Percent,
        }
    }

    /// Creates an absolute trend delta.
    pub fn absolute(value: f64) -> Self {
        Self {
            value,
            unit: TrendUnit::Absolute,
        }
    }

    /// Returns the signed magnitude.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    pub fn unit(&self) -> TrendUnit {
        self.unit
    }

    /// Returns the direction of movement.
    pub fn direction(&self) -> TrendDirection {
        if self.value > 0.0 {
            TrendDirection::Up
        } else if self.value < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }

    /// Whether the movement is good news for the given metric.
    ///
    /// Rank improves downward (position 1 is best); every other metric
    /// improves upward. Flat movement is never favorable.
    pub fn is_favorable(&self, metric: MetricKind) -> bool {
        match self.direction() {
            TrendDirection::Up => !metric.lower_is_better(),
            TrendDirection::Down => metric.lower_is_better(),
            TrendDirection::Flat => false,
        }
    }
}

impl fmt::Display for TrendDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TrendUnit::Percent => write!(f, "{:+.1}%", self.value),
            TrendUnit::Absolute => write!(f, "{:+.1}", self.value),
        }
    }
}

// Serialized as its display string so table consumers can render the
// signed label directly.
impl Serialize for TrendDelta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_displays_with_sign_and_suffix() {
        assert_eq!(format!("{}", TrendDelta::percent(5.2)), "+5.2%");
        assert_eq!(format!("{}", TrendDelta::percent(-1.2)), "-1.2%");
    }

    #[test]
    fn absolute_displays_with_sign_only() {
        assert_eq!(format!("{}", TrendDelta::absolute(-0.4)), "-0.4");
        assert_eq!(format!("{}", TrendDelta::absolute(0.3)), "+0.3");
    }

    #[test]
    fn direction_follows_sign() {
        assert_eq!(TrendDelta::percent(2.8).direction(), TrendDirection::Up);
        assert_eq!(TrendDelta::absolute(-0.6).direction(), TrendDirection::Down);
        assert_eq!(TrendDelta::percent(0.0).direction(), TrendDirection::Flat);
    }

    #[test]
    fn upward_mentions_are_favorable() {
        assert!(TrendDelta::percent(3.1).is_favorable(MetricKind::MentionPercentage));
        assert!(!TrendDelta::percent(-1.2).is_favorable(MetricKind::MentionPercentage));
    }

    #[test]
    fn downward_rank_is_favorable() {
        assert!(TrendDelta::absolute(-0.4).is_favorable(MetricKind::RankPosition));
        assert!(!TrendDelta::absolute(0.3).is_favorable(MetricKind::RankPosition));
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&TrendDelta::percent(8.4)).unwrap();
        assert_eq!(json, "\"+8.4%\"");
    }
}
