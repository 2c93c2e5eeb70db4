//! Cross-dimension influence weighting for category tables.
//!
//! Category tables react to filters on *other* dimensions: selecting a
//! model reweights the intent and geography tables, selecting a persona
//! reweights them again. The adjustment is a multiplicative factor per
//! (table, dimension, selected value), composed in canonical dimension
//! order and quantized exactly once after the full product is applied.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::dataset::{BaseRow, DerivedRow};
use crate::domain::filters::{Dimension, FilterSelection};
use crate::domain::foundation::MetricKind;

/// The category tables subject to influence weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    IntentMentions,
    GeographyMentions,
    IntentRank,
    GeographyRank,
    IntentPerception,
    GeographyPerception,
}

impl TableKind {
    /// Returns the metric the table's values carry.
    pub fn metric(&self) -> MetricKind {
        match self {
            TableKind::IntentMentions | TableKind::GeographyMentions => {
                MetricKind::MentionPercentage
            }
            TableKind::IntentRank | TableKind::GeographyRank => MetricKind::RankPosition,
            TableKind::IntentPerception | TableKind::GeographyPerception => {
                MetricKind::PerceptionScore
            }
        }
    }

    /// Returns the dimension the table's rows enumerate.
    pub fn row_dimension(&self) -> Dimension {
        match self {
            TableKind::IntentMentions | TableKind::IntentRank | TableKind::IntentPerception => {
                Dimension::Intent
            }
            TableKind::GeographyMentions
            | TableKind::GeographyRank
            | TableKind::GeographyPerception => Dimension::Geography,
        }
    }
}

type FactorKey = (TableKind, Dimension, &'static str);

/// Per-table adjustment factors. Combinations absent from this table
/// contribute a factor of 1.0; that default is intentional, not a gap.
static INFLUENCE_FACTORS: Lazy<HashMap<FactorKey, f64>> = Lazy::new(|| {
    use Dimension::{Model, Persona};
    use TableKind::*;

    let entries: [(TableKind, Dimension, &'static str, f64); 42] = [
        (IntentMentions, Model, "gpt4", 1.2),
        (IntentMentions, Model, "claude", 1.1),
        (IntentMentions, Model, "gemini", 0.9),
        (IntentMentions, Model, "llama", 0.9),
        (IntentMentions, Persona, "developer", 1.3),
        (IntentMentions, Persona, "tech", 1.1),
        (IntentMentions, Persona, "business", 0.8),
        (GeographyMentions, Model, "gpt4", 1.1),
        (GeographyMentions, Model, "claude", 1.05),
        (GeographyMentions, Model, "gemini", 0.95),
        (GeographyMentions, Model, "llama", 0.95),
        (GeographyMentions, Persona, "tech", 1.2),
        (GeographyMentions, Persona, "business", 0.9),
        (GeographyMentions, Persona, "developer", 1.1),
        (IntentRank, Model, "gpt4", 0.9),
        (IntentRank, Model, "claude", 0.8),
        (IntentRank, Model, "gemini", 1.1),
        (IntentRank, Model, "llama", 1.1),
        (IntentRank, Persona, "developer", 0.7),
        (IntentRank, Persona, "tech", 0.9),
        (IntentRank, Persona, "business", 1.2),
        (GeographyRank, Model, "gpt4", 0.9),
        (GeographyRank, Model, "claude", 0.85),
        (GeographyRank, Model, "gemini", 1.05),
        (GeographyRank, Model, "llama", 1.05),
        (GeographyRank, Persona, "tech", 0.8),
        (GeographyRank, Persona, "business", 1.1),
        (GeographyRank, Persona, "developer", 0.9),
        (IntentPerception, Model, "claude", 1.1),
        (IntentPerception, Model, "gpt4", 1.05),
        (IntentPerception, Model, "gemini", 0.95),
        (IntentPerception, Model, "llama", 0.95),
        (IntentPerception, Persona, "developer", 1.15),
        (IntentPerception, Persona, "tech", 1.05),
        (IntentPerception, Persona, "business", 0.9),
        (GeographyPerception, Model, "claude", 1.08),
        (GeographyPerception, Model, "gpt4", 1.04),
        (GeographyPerception, Model, "gemini", 0.96),
        (GeographyPerception, Model, "llama", 0.96),
        (GeographyPerception, Persona, "tech", 1.05),
        (GeographyPerception, Persona, "business", 0.95),
        (GeographyPerception, Persona, "developer", 1.1),
    ];

    entries
        .into_iter()
        .map(|(table, dimension, value, factor)| ((table, dimension, value), factor))
        .collect()
});

/// Multiplier a single dimension's filter applies to a table.
///
/// Unconstrained dimensions and undefined combinations contribute 1.0.
pub fn factor(table: TableKind, dimension: Dimension, selection: &FilterSelection) -> f64 {
    match selection.selected_id(dimension) {
        None => 1.0,
        Some(id) => INFLUENCE_FACTORS
            .get(&(table, dimension, id))
            .copied()
            .unwrap_or(1.0),
    }
}

/// Composes the factors of every active dimension in canonical order.
pub fn composed_factor(table: TableKind, selection: &FilterSelection) -> f64 {
    Dimension::all()
        .iter()
        .fold(1.0, |acc, dimension| acc * factor(table, *dimension, selection))
}

/// Applies filter influence to a category table.
///
/// Each row's value is the raw value times the composed factor,
/// quantized once per the table's metric. Rows whose id fails the
/// active filter for the table's own dimension come back de-emphasized,
/// never removed: the output row count always equals the input's.
pub fn apply_influence(
    rows: &[BaseRow],
    table: TableKind,
    selection: &FilterSelection,
) -> Vec<DerivedRow> {
    let multiplier = composed_factor(table, selection);
    let metric = table.metric();
    let selected = selection.selected_id(table.row_dimension());

    rows.iter()
        .map(|row| DerivedRow {
            id: row.id.clone(),
            label: row.label.clone(),
            value: metric.quantize(row.value * multiplier),
            trend: row.trend,
            highlighted: selected.map_or(true, |id| id == row.id),
        })
        .collect()
}
