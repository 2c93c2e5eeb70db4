//! Chart series emphasis weighting.

use serde::Serialize;

/// A named sub-series keyed by the dimension value it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Dimension value id (e.g. "gpt4", "developer").
    pub key: String,
    pub name: String,
    pub data: Vec<f64>,
}

impl ChartSeries {
    /// Creates a new chart series.
    pub fn new(key: impl Into<String>, name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            data,
        }
    }
}

/// A sub-series with its emphasis resolved against a filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedSeries {
    pub key: String,
    pub name: String,
    pub data: Vec<f64>,
    pub emphasized: bool,
}

/// Resolves emphasis for every sub-series against a selected value.
///
/// Filtering is a weighting operation, never a removal: the output
/// always contains every input sub-series, because the same selection
/// feeds other dependent views. `None` (unconstrained) emphasizes
/// everything; a concrete key emphasizes only the match and dims the
/// rest.
pub fn select_series(series: &[ChartSeries], selected: Option<&str>) -> Vec<WeightedSeries> {
    series
        .iter()
        .map(|sub| WeightedSeries {
            key: sub.key.clone(),
            name: sub.name.clone(),
            data: sub.data.clone(),
            emphasized: selected.map_or(true, |key| sub.key == key),
        })
        .collect()
}

/// The shape every charting surface consumes: ordered category labels
/// plus the weighted sub-series indexed to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<WeightedSeries>,
    /// Rank charts render upside down so improvement reads upward.
    pub inverted_axis: bool,
}

impl ChartData {
    /// Creates chart data with the normal axis direction.
    pub fn new(categories: Vec<String>, series: Vec<WeightedSeries>) -> Self {
        Self {
            categories,
            series,
            inverted_axis: false,
        }
    }

    /// Creates chart data with an inverted value axis.
    pub fn inverted(categories: Vec<String>, series: Vec<WeightedSeries>) -> Self {
        Self {
            categories,
            series,
            inverted_axis: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn model_series() -> Vec<ChartSeries> {
        vec![
            ChartSeries::new("gpt4", "GPT-4", vec![62.0, 65.0, 68.0]),
            ChartSeries::new("claude", "Claude", vec![52.0, 55.0, 58.0]),
            ChartSeries::new("gemini", "Gemini", vec![42.0, 45.0, 48.0]),
            ChartSeries::new("llama", "Llama", vec![32.0, 35.0, 38.0]),
        ]
    }

    #[test]
    fn unconstrained_selection_emphasizes_everything() {
        let weighted = select_series(&model_series(), None);
        assert_eq!(weighted.len(), 4);
        assert!(weighted.iter().all(|s| s.emphasized));
    }

    #[test]
    fn concrete_selection_emphasizes_only_the_match() {
        let weighted = select_series(&model_series(), Some("claude"));
        assert_eq!(weighted.len(), 4);
        for sub in &weighted {
            assert_eq!(sub.emphasized, sub.key == "claude");
        }
    }

    #[test]
    fn selection_never_alters_data_values() {
        let input = model_series();
        let weighted = select_series(&input, Some("gpt4"));
        for (raw, out) in input.iter().zip(&weighted) {
            assert_eq!(raw.data, out.data);
            assert_eq!(raw.name, out.name);
        }
    }

    #[test]
    fn reselecting_all_restores_full_emphasis() {
        let filtered = select_series(&model_series(), Some("llama"));
        assert_eq!(filtered.iter().filter(|s| s.emphasized).count(), 1);
        let restored = select_series(&model_series(), None);
        assert_eq!(restored.iter().filter(|s| s.emphasized).count(), 4);
    }

    #[test]
    fn unknown_key_dims_everything_but_removes_nothing() {
        let weighted = select_series(&model_series(), Some("bard"));
        assert_eq!(weighted.len(), 4);
        assert!(weighted.iter().all(|s| !s.emphasized));
    }

    proptest! {
        // Non-destructive filtering: output length always equals input
        // length, whatever the selection.
        #[test]
        fn output_length_equals_input_length(
            keys in proptest::collection::vec("[a-z]{1,8}", 0..12),
            selected in proptest::option::of("[a-z]{1,8}"),
        ) {
            let series: Vec<ChartSeries> = keys
                .iter()
                .map(|k| ChartSeries::new(k.clone(), k.to_uppercase(), vec![1.0, 2.0]))
                .collect();
            let weighted = select_series(&series, selected.as_deref());
            prop_assert_eq!(weighted.len(), series.len());
        }
    }
}
