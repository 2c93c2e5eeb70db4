//! Metric breakdown view - the shared shape of the mention, ranking,
//! and perception analytics screens.
//!
//! The three screens differ only in which metric their charts carry and
//! which influence tables feed their category breakdowns, so each is a
//! `BreakdownSpec` entry rather than its own code path.

use serde::Serialize;

use super::filter_summary::FilterSummary;
use crate::domain::analysis::{
    apply_influence, select_series, BaseRow, ChartData, DerivedRow, TableKind, TrendSeriesSet,
};
use crate::domain::filters::{Dimension, FilterSelection};
use crate::domain::foundation::MetricKind;

/// Declarative wiring of one analytics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownSpec {
    pub metric: MetricKind,
    pub intent_table: TableKind,
    pub geography_table: TableKind,
}

impl BreakdownSpec {
    /// Mention analytics screen wiring.
    pub const MENTIONS: Self = Self {
        metric: MetricKind::MentionPercentage,
        intent_table: TableKind::IntentMentions,
        geography_table: TableKind::GeographyMentions,
    };

    /// Ranking analytics screen wiring.
    pub const RANKINGS: Self = Self {
        metric: MetricKind::RankPosition,
        intent_table: TableKind::IntentRank,
        geography_table: TableKind::GeographyRank,
    };

    /// Perception analytics screen wiring.
    pub const PERCEPTION: Self = Self {
        metric: MetricKind::PerceptionScore,
        intent_table: TableKind::IntentPerception,
        geography_table: TableKind::GeographyPerception,
    };
}

/// Derived view behind a single-metric analytics screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBreakdown {
    pub metric: MetricKind,
    pub model_trend: ChartData,
    pub persona_trend: ChartData,
    pub intent_table: Vec<DerivedRow>,
    pub geography_table: Vec<DerivedRow>,
    pub filters: FilterSummary,
}

impl MetricBreakdown {
    /// Builds the view from raw series and category tables.
    ///
    /// Pure: recomputed in full whenever the selection or dataset
    /// changes, never patched in place.
    pub fn build(
        spec: BreakdownSpec,
        trends: &TrendSeriesSet,
        intent_rows: &[BaseRow],
        geography_rows: &[BaseRow],
        selection: &FilterSelection,
    ) -> Self {
        let inverted = spec.metric.lower_is_better();
        let model_series =
            select_series(&trends.by_model, selection.selected_id(Dimension::Model));
        let persona_series =
            select_series(&trends.by_persona, selection.selected_id(Dimension::Persona));

        let model_trend = if inverted {
            ChartData::inverted(trends.categories.clone(), model_series)
        } else {
            ChartData::new(trends.categories.clone(), model_series)
        };
        let persona_trend = if inverted {
            ChartData::inverted(trends.categories.clone(), persona_series)
        } else {
            ChartData::new(trends.categories.clone(), persona_series)
        };

        Self {
            metric: spec.metric,
            model_trend,
            persona_trend,
            intent_table: apply_influence(intent_rows, spec.intent_table, selection),
            geography_table: apply_influence(geography_rows, spec.geography_table, selection),
            filters: FilterSummary::of(selection),
        }
    }
}

#[cfg(test)]
#[path = "breakdown_test.rs"]
mod breakdown_test;
