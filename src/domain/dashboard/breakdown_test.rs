#[cfg(test)]
mod tests {
    use crate::domain::analysis::{BaseRow, ChartSeries, TrendSeriesSet};
    use crate::domain::dashboard::breakdown::{BreakdownSpec, MetricBreakdown};
    use crate::domain::filters::{FilterSelection, ModelFilter, PersonaFilter, TimeRange};
    use crate::domain::foundation::{MetricKind, TrendDelta};

    fn rank_trends() -> TrendSeriesSet {
        TrendSeriesSet {
            metric: MetricKind::RankPosition,
            range: TimeRange::Last30Days,
            categories: vec![
                "Jan 1".into(),
                "Jan 8".into(),
                "Jan 15".into(),
                "Jan 22".into(),
                "Jan 30".into(),
            ],
            by_model: vec![
                ChartSeries::new("gpt4", "GPT-4", vec![2.8, 2.6, 2.4, 2.2, 2.1]),
                ChartSeries::new("claude", "Claude", vec![2.4, 2.2, 2.0, 1.8, 1.7]),
            ],
            by_persona: vec![
                ChartSeries::new("tech", "Tech Enthusiast", vec![2.6, 2.4, 2.2, 2.0, 1.9]),
                ChartSeries::new("developer", "Developer", vec![1.8, 1.6, 1.4, 1.2, 1.1]),
            ],
        }
    }

    fn intent_rank_rows() -> Vec<BaseRow> {
        vec![
            BaseRow::new("comparison", "Product Comparison", 2.3, TrendDelta::absolute(-0.4)),
            BaseRow::new("feature", "Feature Inquiry", 1.8, TrendDelta::absolute(-0.2)),
        ]
    }

    fn geography_rank_rows() -> Vec<BaseRow> {
        vec![
            BaseRow::new("na", "North America", 1.8, TrendDelta::absolute(-0.3)),
            BaseRow::new("eu", "Europe", 2.4, TrendDelta::absolute(-0.1)),
        ]
    }

    #[test]
    fn rank_breakdown_inverts_chart_axes() {
        let view = MetricBreakdown::build(
            BreakdownSpec::RANKINGS,
            &rank_trends(),
            &intent_rank_rows(),
            &geography_rank_rows(),
            &FilterSelection::zero_state(),
        );
        assert!(view.model_trend.inverted_axis);
        assert!(view.persona_trend.inverted_axis);
        assert_eq!(view.metric, MetricKind::RankPosition);
    }

    #[test]
    fn model_selection_emphasizes_one_series_and_reweights_tables() {
        let selection = FilterSelection {
            model: ModelFilter::Gpt4,
            ..FilterSelection::zero_state()
        };
        let view = MetricBreakdown::build(
            BreakdownSpec::RANKINGS,
            &rank_trends(),
            &intent_rank_rows(),
            &geography_rank_rows(),
            &selection,
        );

        let emphasized: Vec<&str> = view
            .model_trend
            .series
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(emphasized, vec!["gpt4"]);
        // Persona chart stays fully emphasized; the model filter does
        // not constrain it.
        assert!(view.persona_trend.series.iter().all(|s| s.emphasized));

        // 2.3 * 0.9 = 2.07 -> 2.1, 1.8 * 0.9 = 1.62 -> 1.6
        assert_eq!(view.intent_table[0].value, 2.1);
        assert_eq!(view.intent_table[1].value, 1.6);
        // 1.8 * 0.9 = 1.62 -> 1.6, 2.4 * 0.9 = 2.16 -> 2.2
        assert_eq!(view.geography_table[0].value, 1.6);
        assert_eq!(view.geography_table[1].value, 2.2);
    }

    #[test]
    fn breakdown_keeps_every_row_and_series() {
        let selection = FilterSelection {
            model: ModelFilter::Claude,
            persona: PersonaFilter::Developer,
            ..FilterSelection::zero_state()
        };
        let view = MetricBreakdown::build(
            BreakdownSpec::RANKINGS,
            &rank_trends(),
            &intent_rank_rows(),
            &geography_rank_rows(),
            &selection,
        );
        assert_eq!(view.model_trend.series.len(), 2);
        assert_eq!(view.persona_trend.series.len(), 2);
        assert_eq!(view.intent_table.len(), 2);
        assert_eq!(view.geography_table.len(), 2);
    }

    #[test]
    fn building_twice_yields_identical_views() {
        let selection = FilterSelection {
            persona: PersonaFilter::Tech,
            ..FilterSelection::zero_state()
        };
        let first = MetricBreakdown::build(
            BreakdownSpec::RANKINGS,
            &rank_trends(),
            &intent_rank_rows(),
            &geography_rank_rows(),
            &selection,
        );
        let second = MetricBreakdown::build(
            BreakdownSpec::RANKINGS,
            &rank_trends(),
            &intent_rank_rows(),
            &geography_rank_rows(),
            &selection,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_to_camel_case() {
        let view = MetricBreakdown::build(
            BreakdownSpec::RANKINGS,
            &rank_trends(),
            &intent_rank_rows(),
            &geography_rank_rows(),
            &FilterSelection::zero_state(),
        );
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"modelTrend\""));
        assert!(json.contains("\"invertedAxis\":true"));
        assert!(json.contains("\"geographyTable\""));
    }
}
