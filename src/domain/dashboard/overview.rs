//! The overview dashboard - brand position at a glance.

use serde::Serialize;

use crate::domain::analysis::{select_series, ChartData, ChartSeries, CitationCount, OverviewDataset};
use crate::domain::filters::TimeRange;
use crate::domain::foundation::Percentage;

/// Derived view behind the overview screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandOverview {
    /// Share of total brand mentions versus competitors.
    pub share_of_voice: Percentage,

    /// Mention counts for the brand and its competitors.
    pub mention_frequency: ChartData,

    /// Six-month ranking position trend (lower is better).
    pub ranking_trend: ChartData,

    /// Positive / neutral / negative sentiment over the same months.
    pub sentiment_trend: ChartData,

    /// Most frequently cited sources.
    pub top_citations: Vec<CitationCount>,

    pub time_range: TimeRange,
}

impl BrandOverview {
    /// Builds the overview from its raw dataset.
    ///
    /// The overview charts have no legend filtering, so every series
    /// comes back fully emphasized.
    pub fn build(dataset: &OverviewDataset, time_range: TimeRange) -> Self {
        let mention_series = vec![ChartSeries::new(
            "mentions",
            "Mentions",
            dataset.competitor_mentions.clone(),
        )];
        let ranking_series = vec![ChartSeries::new(
            "ranking",
            "Ranking",
            dataset.ranking_trend.clone(),
        )];

        Self {
            share_of_voice: dataset.share_of_voice,
            mention_frequency: ChartData::new(
                dataset.competitor_labels.clone(),
                select_series(&mention_series, None),
            ),
            ranking_trend: ChartData::inverted(
                dataset.trend_categories.clone(),
                select_series(&ranking_series, None),
            ),
            sentiment_trend: ChartData::new(
                dataset.trend_categories.clone(),
                select_series(&dataset.sentiment_series, None),
            ),
            top_citations: dataset.top_citations.clone(),
            time_range,
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
