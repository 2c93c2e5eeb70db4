//! Active-filter affordance state shipped with every view.

use serde::Serialize;

use crate::domain::filters::FilterSelection;

/// What the filter bar needs: the selection itself, the active count
/// for the badge, display labels for chips, and the reset affordance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    pub selection: FilterSelection,
    pub active_count: usize,
    pub labels: Vec<String>,
    pub can_reset: bool,
}

impl FilterSummary {
    /// Computes the summary for a selection.
    pub fn of(selection: &FilterSelection) -> Self {
        let active_count = selection.active_filter_count();
        Self {
            selection: *selection,
            active_count,
            labels: selection.active_filter_labels(),
            can_reset: active_count > 0,
        }
    }
}
