//! Raw dataset records the engine aggregates over.
//!
//! Collections of these types are immutable once loaded: the engine
//! reads them by reference and returns freshly constructed outputs.

use serde::Serialize;

use super::series::ChartSeries;
use crate::domain::filters::TimeRange;
use crate::domain::foundation::{MetricKind, Percentage, TrendDelta};

/// One row of a category-level table before filter influence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRow {
    /// Dimension value id this row belongs to (e.g. "pricing", "na").
    pub id: String,
    pub label: String,
    pub value: f64,
    pub trend: TrendDelta,
}

impl BaseRow {
    /// Creates a new base row.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        trend: TrendDelta,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value,
            trend,
        }
    }
}

/// Output row of a derived category table.
///
/// `highlighted` is false only for rows that fail the active filter
/// for their dimension; de-emphasized rows stay in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedRow {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub trend: TrendDelta,
    pub highlighted: bool,
}

/// Trend chart data for one time range: shared bucket categories plus
/// the per-model and per-persona sub-series indexed to them.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeriesSet {
    pub metric: MetricKind,
    pub range: TimeRange,
    pub categories: Vec<String>,
    pub by_model: Vec<ChartSeries>,
    pub by_persona: Vec<ChartSeries>,
}

/// Share of total mentions a source contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceShare {
    pub source: String,
    pub mentions: u32,
    pub percentage: Percentage,
}

/// One citation source with its cross-metric measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationRow {
    pub source: String,
    pub citation_frequency: u32,
    pub mention_percent: f64,
    pub avg_rank: f64,
    pub perception_score: f64,
}

/// A cited source and how often it appears, for the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationCount {
    pub source: String,
    pub count: u32,
}

/// Raw inputs behind the overview screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewDataset {
    pub share_of_voice: Percentage,
    /// Brand and competitor labels for the mention frequency chart.
    pub competitor_labels: Vec<String>,
    pub competitor_mentions: Vec<f64>,
    /// Month labels shared by the ranking and sentiment trends.
    pub trend_categories: Vec<String>,
    pub ranking_trend: Vec<f64>,
    pub sentiment_series: Vec<ChartSeries>,
    pub top_citations: Vec<CitationCount>,
}
