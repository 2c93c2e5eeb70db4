//! TimeRange enum and its fixed bucket label sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const DAILY_LABELS: &[&str] = &[
    "Jan 24", "Jan 25", "Jan 26", "Jan 27", "Jan 28", "Jan 29", "Jan 30",
];
const WEEKLY_LABELS: &[&str] = &["Jan 1", "Jan 8", "Jan 15", "Jan 22", "Jan 30"];
const MONTHLY_LABELS: &[&str] = &["Oct", "Nov", "Dec", "Jan"];

/// Bucket granularity implied by a time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

/// The selectable reporting windows.
///
/// Each range maps to a fixed, distinct bucket label set; switching
/// ranges is a total replacement of the labels and the values indexed
/// to them, never an interpolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    Last7Days,
    #[default]
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
}

impl TimeRange {
    /// Returns all time ranges in widening order.
    pub fn all() -> &'static [TimeRange] {
        &[
            TimeRange::Last7Days,
            TimeRange::Last30Days,
            TimeRange::Last90Days,
        ]
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7days",
            TimeRange::Last30Days => "30days",
            TimeRange::Last90Days => "90days",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "Last 7 Days",
            TimeRange::Last30Days => "Last 30 Days",
            TimeRange::Last90Days => "Last 90 Days",
        }
    }

    /// Returns the bucket granularity for this range.
    pub fn granularity(&self) -> Granularity {
        match self {
            TimeRange::Last7Days => Granularity::Daily,
            TimeRange::Last30Days => Granularity::Weekly,
            TimeRange::Last90Days => Granularity::Monthly,
        }
    }

    /// Returns the ordered bucket labels for this range.
    ///
    /// The label sets are configuration constants: 7 daily buckets,
    /// 5 weekly buckets, or 4 monthly buckets.
    pub fn bucket_labels(&self) -> &'static [&'static str] {
        match self {
            TimeRange::Last7Days => DAILY_LABELS,
            TimeRange::Last30Days => WEEKLY_LABELS,
            TimeRange::Last90Days => MONTHLY_LABELS,
        }
    }

    /// Returns the number of buckets in this range.
    pub fn bucket_count(&self) -> usize {
        self.bucket_labels().len()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for TimeRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7days" => Ok(TimeRange::Last7Days),
            "30days" => Ok(TimeRange::Last30Days),
            "90days" => Ok(TimeRange::Last90Days),
            other => Err(ValidationError::unknown_value("timeRange", other)),
        }
    }
}
