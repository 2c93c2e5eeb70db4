//! Fixture dataset adapter - the in-memory dataset the dashboard ships
//! with until a live collection API exists.

mod series;
mod tables;

use crate::domain::analysis::{
    BaseRow, CitationRow, OverviewDataset, SourceShare, TableKind, TrendSeriesSet,
};
use crate::domain::filters::TimeRange;
use crate::domain::foundation::MetricKind;
use crate::ports::{AnalyticsDataSource, DataSourceError};

/// In-memory implementation of [`AnalyticsDataSource`].
///
/// Holds no runtime state; every call rebuilds its result from static
/// fixture data, so callers are free to treat outputs as their own.
#[derive(Debug, Default)]
pub struct FixtureDataSource;

impl FixtureDataSource {
    /// Creates the fixture source.
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticsDataSource for FixtureDataSource {
    fn overview(&self, _range: TimeRange) -> Result<OverviewDataset, DataSourceError> {
        Ok(tables::overview_dataset())
    }

    fn trend_series(
        &self,
        metric: MetricKind,
        range: TimeRange,
    ) -> Result<TrendSeriesSet, DataSourceError> {
        series::trend_series(metric, range).ok_or(DataSourceError::MissingSeries(metric))
    }

    fn category_rows(&self, table: TableKind) -> Result<Vec<BaseRow>, DataSourceError> {
        Ok(tables::category_rows(table))
    }

    fn mention_sources(&self) -> Result<Vec<SourceShare>, DataSourceError> {
        Ok(tables::mention_sources())
    }

    fn citations(&self) -> Result<Vec<CitationRow>, DataSourceError> {
        Ok(tables::citation_rows())
    }
}
