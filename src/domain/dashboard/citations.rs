//! Citation analytics view - sortable citation source table.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{sort_rows, CitationRow, SortState};

/// Sortable columns of the citation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CitationSortKey {
    CitationFrequency,
    MentionPercent,
    AvgRank,
    PerceptionScore,
}

impl CitationSortKey {
    /// Extracts the sortable value from a row.
    pub fn value_of(&self, row: &CitationRow) -> f64 {
        match self {
            CitationSortKey::CitationFrequency => f64::from(row.citation_frequency),
            CitationSortKey::MentionPercent => row.mention_percent,
            CitationSortKey::AvgRank => row.avg_rank,
            CitationSortKey::PerceptionScore => row.perception_score,
        }
    }
}

/// Derived view behind the citation analytics screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationAnalytics {
    pub rows: Vec<CitationRow>,
    pub sort: SortState<CitationSortKey>,
}

impl CitationAnalytics {
    /// The screen opens sorted by citation frequency, descending.
    pub fn default_sort() -> SortState<CitationSortKey> {
        SortState::new(CitationSortKey::CitationFrequency)
    }

    /// Builds the view with rows ordered per the sort state. The sort
    /// is stable, so tied rows keep the dataset's order.
    pub fn build(rows: &[CitationRow], sort: SortState<CitationSortKey>) -> Self {
        Self {
            rows: sort_rows(rows, |row| sort.key.value_of(row), sort.order),
            sort,
        }
    }
}

#[cfg(test)]
#[path = "citations_test.rs"]
mod citations_test;
