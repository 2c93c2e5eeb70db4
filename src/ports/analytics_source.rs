//! Read-only port for raw analytics datasets.

use crate::domain::analysis::{
    BaseRow, CitationRow, OverviewDataset, SourceShare, TableKind, TrendSeriesSet,
};
use crate::domain::filters::TimeRange;
use crate::domain::foundation::MetricKind;

/// Read-only source of raw metric datasets.
///
/// The engine treats whatever comes back as immutable: it never writes
/// through this port. Today the only implementation holds fixture data
/// in memory; a remote API can slot in behind the same trait.
pub trait AnalyticsDataSource: Send + Sync {
    /// Raw inputs for the overview screen.
    fn overview(&self, range: TimeRange) -> Result<OverviewDataset, DataSourceError>;

    /// Per-model and per-persona trend series for one metric, resolved
    /// to the requested time range's buckets.
    fn trend_series(
        &self,
        metric: MetricKind,
        range: TimeRange,
    ) -> Result<TrendSeriesSet, DataSourceError>;

    /// Base rows of a category table, before influence weighting.
    fn category_rows(&self, table: TableKind) -> Result<Vec<BaseRow>, DataSourceError>;

    /// Mention source share cards.
    fn mention_sources(&self) -> Result<Vec<SourceShare>, DataSourceError>;

    /// Citation source measurements.
    fn citations(&self) -> Result<Vec<CitationRow>, DataSourceError>;
}

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("No trend series exist for metric {0:?}")]
    MissingSeries(MetricKind),

    #[error("No category table {0:?}")]
    MissingTable(TableKind),

    #[error("Dataset unavailable: {0}")]
    Unavailable(String),
}
