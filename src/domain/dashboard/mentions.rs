//! Mention analytics view - mention share across models, personas,
//! intents, and regions, plus the source share cards.

use serde::Serialize;

use super::breakdown::{BreakdownSpec, MetricBreakdown};
use crate::domain::analysis::{BaseRow, SourceShare, TrendSeriesSet};
use crate::domain::filters::FilterSelection;

/// Derived view behind the mention analytics screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionAnalytics {
    #[serde(flatten)]
    pub breakdown: MetricBreakdown,
    pub sources: Vec<SourceShare>,
}

impl MentionAnalytics {
    /// Builds the view from raw series, category tables, and source
    /// shares.
    pub fn build(
        trends: &TrendSeriesSet,
        intent_rows: &[BaseRow],
        geography_rows: &[BaseRow],
        sources: &[SourceShare],
        selection: &FilterSelection,
    ) -> Self {
        Self {
            breakdown: MetricBreakdown::build(
                BreakdownSpec::MENTIONS,
                trends,
                intent_rows,
                geography_rows,
                selection,
            ),
            sources: sources.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ChartSeries;
    use crate::domain::filters::{ModelFilter, TimeRange};
    use crate::domain::foundation::{MetricKind, Percentage, TrendDelta};

    fn mention_trends() -> TrendSeriesSet {
        TrendSeriesSet {
            metric: MetricKind::MentionPercentage,
            range: TimeRange::Last90Days,
            categories: vec!["Oct".into(), "Nov".into(), "Dec".into(), "Jan".into()],
            by_model: vec![
                ChartSeries::new("gpt4", "GPT-4", vec![55.0, 60.0, 68.0, 75.0]),
                ChartSeries::new("claude", "Claude", vec![45.0, 50.0, 58.0, 65.0]),
            ],
            by_persona: vec![ChartSeries::new(
                "tech",
                "Tech Enthusiast",
                vec![50.0, 55.0, 65.0, 72.0],
            )],
        }
    }

    fn sources() -> Vec<SourceShare> {
        vec![SourceShare {
            source: "AI Model Responses".into(),
            mentions: 1247,
            percentage: Percentage::new(34),
        }]
    }

    #[test]
    fn carries_sources_through_unchanged() {
        let intent = vec![BaseRow::new(
            "pricing",
            "Pricing Questions",
            28.0,
            TrendDelta::percent(-1.2),
        )];
        let view = MentionAnalytics::build(
            &mention_trends(),
            &intent,
            &[],
            &sources(),
            &FilterSelection::zero_state(),
        );
        assert_eq!(view.sources, sources());
        assert!(!view.breakdown.model_trend.inverted_axis);
    }

    #[test]
    fn flattens_breakdown_fields_in_json() {
        let selection = FilterSelection {
            model: ModelFilter::Gpt4,
            ..FilterSelection::zero_state()
        };
        let view = MentionAnalytics::build(&mention_trends(), &[], &[], &sources(), &selection);
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"modelTrend\""));
        assert!(json.contains("\"sources\""));
        assert!(json.contains("\"activeCount\":1"));
    }
}
