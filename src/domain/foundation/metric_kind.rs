//! MetricKind enum and per-metric quantization rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of metrics tracked across the analytics surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    MentionPercentage,
    RankPosition,
    PerceptionScore,
    CitationCount,
    CitationQuality,
}

impl MetricKind {
    /// Returns all metric kinds.
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::MentionPercentage,
            MetricKind::RankPosition,
            MetricKind::PerceptionScore,
            MetricKind::CitationCount,
            MetricKind::CitationQuality,
        ]
    }

    /// Quantizes a derived value to the metric's display convention.
    ///
    /// Counts, percentages, and 0-100 scores round to whole numbers.
    /// Rank keeps one decimal and never drops below 1.0 (rank 1 is the
    /// best possible position). Citation quality keeps one decimal on
    /// its 0-10 scale.
    pub fn quantize(&self, value: f64) -> f64 {
        match self {
            MetricKind::MentionPercentage
            | MetricKind::PerceptionScore
            | MetricKind::CitationCount => value.round(),
            MetricKind::RankPosition => ((value * 10.0).round() / 10.0).max(1.0),
            MetricKind::CitationQuality => (value * 10.0).round() / 10.0,
        }
    }

    /// True when smaller values are better for this metric.
    ///
    /// Rank charts render with an inverted axis so that improvement
    /// still reads upward.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, MetricKind::RankPosition)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MetricKind::MentionPercentage => "mention_percentage",
            MetricKind::RankPosition => "rank_position",
            MetricKind::PerceptionScore => "perception_score",
            MetricKind::CitationCount => "citation_count",
            MetricKind::CitationQuality => "citation_quality",
        };
        write!(f, "{}", s)
    }
}
