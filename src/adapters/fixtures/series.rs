//! Trend series fixtures per metric and time range.
//!
//! Values are indexed to the time range's bucket labels; switching
//! ranges swaps the whole slice, there is no resampling.

use crate::domain::analysis::{ChartSeries, TrendSeriesSet};
use crate::domain::filters::{ModelFilter, PersonaFilter, TimeRange};
use crate::domain::foundation::MetricKind;

struct RangeSlices {
    model: [&'static [f64]; 4],
    persona: [&'static [f64]; 3],
}

fn mention_slices(range: TimeRange) -> RangeSlices {
    match range {
        TimeRange::Last7Days => RangeSlices {
            model: [
                &[70.0, 72.0, 74.0, 73.0, 75.0, 74.0, 75.0],
                &[60.0, 62.0, 64.0, 63.0, 65.0, 64.0, 65.0],
                &[50.0, 52.0, 54.0, 53.0, 55.0, 54.0, 55.0],
                &[40.0, 42.0, 44.0, 43.0, 45.0, 44.0, 45.0],
            ],
            persona: [
                &[68.0, 70.0, 72.0, 71.0, 72.0, 71.0, 72.0],
                &[48.0, 50.0, 52.0, 51.0, 52.0, 51.0, 52.0],
                &[78.0, 80.0, 82.0, 81.0, 82.0, 81.0, 82.0],
            ],
        },
        TimeRange::Last30Days => RangeSlices {
            model: [
                &[62.0, 65.0, 68.0, 72.0, 75.0],
                &[52.0, 55.0, 58.0, 62.0, 65.0],
                &[42.0, 45.0, 48.0, 52.0, 55.0],
                &[32.0, 35.0, 38.0, 42.0, 45.0],
            ],
            persona: [
                &[58.0, 62.0, 65.0, 68.0, 72.0],
                &[38.0, 42.0, 45.0, 48.0, 52.0],
                &[68.0, 72.0, 75.0, 78.0, 82.0],
            ],
        },
        TimeRange::Last90Days => RangeSlices {
            model: [
                &[55.0, 60.0, 68.0, 75.0],
                &[45.0, 50.0, 58.0, 65.0],
                &[35.0, 40.0, 48.0, 55.0],
                &[25.0, 30.0, 38.0, 45.0],
            ],
            persona: [
                &[50.0, 55.0, 65.0, 72.0],
                &[30.0, 35.0, 45.0, 52.0],
                &[60.0, 65.0, 75.0, 82.0],
            ],
        },
    }
}

fn rank_slices(range: TimeRange) -> RangeSlices {
    match range {
        TimeRange::Last7Days => RangeSlices {
            model: [
                &[2.1, 2.2, 2.3, 2.2, 2.4, 2.3, 2.4],
                &[1.8, 1.9, 2.0, 1.9, 2.1, 2.0, 2.1],
                &[2.8, 2.9, 3.0, 2.9, 3.1, 3.0, 3.1],
                &[3.8, 3.9, 4.0, 3.9, 4.1, 4.0, 4.1],
            ],
            persona: [
                &[2.2, 2.1, 2.0, 2.1, 2.0, 2.1, 2.0],
                &[2.8, 2.7, 2.6, 2.7, 2.6, 2.7, 2.6],
                &[1.6, 1.5, 1.4, 1.5, 1.4, 1.5, 1.4],
            ],
        },
        TimeRange::Last30Days => RangeSlices {
            model: [
                &[2.8, 2.6, 2.4, 2.2, 2.1],
                &[2.4, 2.2, 2.0, 1.8, 1.7],
                &[3.4, 3.2, 3.0, 2.8, 2.7],
                &[4.4, 4.2, 4.0, 3.8, 3.7],
            ],
            persona: [
                &[2.6, 2.4, 2.2, 2.0, 1.9],
                &[3.2, 3.0, 2.8, 2.6, 2.5],
                &[1.8, 1.6, 1.4, 1.2, 1.1],
            ],
        },
        TimeRange::Last90Days => RangeSlices {
            model: [
                &[3.2, 2.8, 2.4, 2.1],
                &[2.8, 2.4, 2.0, 1.7],
                &[3.8, 3.4, 3.0, 2.7],
                &[4.8, 4.4, 4.0, 3.7],
            ],
            persona: [
                &[3.0, 2.6, 2.2, 1.9],
                &[3.6, 3.2, 2.8, 2.5],
                &[2.2, 1.8, 1.4, 1.1],
            ],
        },
    }
}

fn perception_slices(range: TimeRange) -> RangeSlices {
    match range {
        TimeRange::Last7Days => RangeSlices {
            model: [
                &[76.0, 77.0, 78.0, 77.0, 79.0, 78.0, 79.0],
                &[82.0, 83.0, 84.0, 83.0, 85.0, 84.0, 85.0],
                &[68.0, 69.0, 70.0, 69.0, 71.0, 70.0, 71.0],
                &[61.0, 62.0, 63.0, 62.0, 64.0, 63.0, 64.0],
            ],
            persona: [
                &[74.0, 75.0, 76.0, 75.0, 77.0, 76.0, 77.0],
                &[69.0, 70.0, 71.0, 70.0, 72.0, 71.0, 72.0],
                &[84.0, 85.0, 86.0, 85.0, 87.0, 86.0, 87.0],
            ],
        },
        TimeRange::Last30Days => RangeSlices {
            model: [
                &[72.0, 74.0, 76.0, 78.0, 79.0],
                &[78.0, 80.0, 82.0, 84.0, 85.0],
                &[64.0, 66.0, 68.0, 70.0, 71.0],
                &[57.0, 59.0, 61.0, 63.0, 64.0],
            ],
            persona: [
                &[70.0, 72.0, 74.0, 76.0, 77.0],
                &[65.0, 67.0, 69.0, 71.0, 72.0],
                &[80.0, 82.0, 84.0, 86.0, 87.0],
            ],
        },
        TimeRange::Last90Days => RangeSlices {
            model: [
                &[68.0, 72.0, 76.0, 79.0],
                &[74.0, 78.0, 82.0, 85.0],
                &[60.0, 64.0, 68.0, 71.0],
                &[53.0, 57.0, 61.0, 64.0],
            ],
            persona: [
                &[66.0, 70.0, 74.0, 77.0],
                &[61.0, 65.0, 69.0, 72.0],
                &[76.0, 80.0, 84.0, 87.0],
            ],
        },
    }
}

/// Builds the trend series set for a metric, or `None` for metrics
/// without a trend surface (citation counts and quality).
pub(super) fn trend_series(metric: MetricKind, range: TimeRange) -> Option<TrendSeriesSet> {
    let slices = match metric {
        MetricKind::MentionPercentage => mention_slices(range),
        MetricKind::RankPosition => rank_slices(range),
        MetricKind::PerceptionScore => perception_slices(range),
        MetricKind::CitationCount | MetricKind::CitationQuality => return None,
    };

    let categories = range
        .bucket_labels()
        .iter()
        .map(|label| label.to_string())
        .collect();
    let by_model = ModelFilter::concrete()
        .iter()
        .zip(slices.model)
        .map(|(model, data)| ChartSeries::new(model.id(), model.display_name(), data.to_vec()))
        .collect();
    let by_persona = PersonaFilter::concrete()
        .iter()
        .zip(slices.persona)
        .map(|(persona, data)| {
            ChartSeries::new(persona.id(), persona.display_name(), data.to_vec())
        })
        .collect();

    Some(TrendSeriesSet {
        metric,
        range,
        categories,
        by_model,
        by_persona,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_spans_the_range_buckets() {
        for metric in [
            MetricKind::MentionPercentage,
            MetricKind::RankPosition,
            MetricKind::PerceptionScore,
        ] {
            for range in TimeRange::all() {
                let set = trend_series(metric, *range).unwrap();
                assert_eq!(set.categories.len(), range.bucket_count());
                for series in set.by_model.iter().chain(&set.by_persona) {
                    assert_eq!(series.data.len(), range.bucket_count());
                }
            }
        }
    }

    #[test]
    fn four_model_and_three_persona_series() {
        let set = trend_series(MetricKind::MentionPercentage, TimeRange::Last30Days).unwrap();
        assert_eq!(set.by_model.len(), 4);
        assert_eq!(set.by_persona.len(), 3);
        assert_eq!(set.by_model[0].key, "gpt4");
        assert_eq!(set.by_persona[2].key, "developer");
    }

    #[test]
    fn citation_metrics_have_no_trend_surface() {
        assert!(trend_series(MetricKind::CitationCount, TimeRange::Last30Days).is_none());
        assert!(trend_series(MetricKind::CitationQuality, TimeRange::Last7Days).is_none());
    }

    #[test]
    fn rank_series_stay_at_or_above_one() {
        for range in TimeRange::all() {
            let set = trend_series(MetricKind::RankPosition, *range).unwrap();
            for series in set.by_model.iter().chain(&set.by_persona) {
                assert!(series.data.iter().all(|v| *v >= 1.0));
            }
        }
    }
}
