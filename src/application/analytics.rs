//! Analytics service - loads raw datasets through the data source port
//! and assembles the derived views the screens render.

use tracing::debug;

use crate::domain::analysis::SortState;
use crate::domain::dashboard::{
    BrandOverview, BreakdownSpec, CitationAnalytics, CitationSortKey, MentionAnalytics,
    MetricBreakdown,
};
use crate::domain::filters::FilterSelection;
use crate::ports::{AnalyticsDataSource, DataSourceError};

/// Builds dashboard views from a data source and a filter selection.
///
/// Stateless apart from the source handle: each call loads fresh
/// inputs and recomputes the view from scratch.
pub struct AnalyticsService<D> {
    source: D,
}

impl<D: AnalyticsDataSource> AnalyticsService<D> {
    /// Creates a service over a data source.
    pub fn new(source: D) -> Self {
        Self { source }
    }

    /// Builds the overview view.
    pub fn overview(
        &self,
        selection: &FilterSelection,
    ) -> Result<BrandOverview, DataSourceError> {
        debug!(range = %selection.time_range, "building overview");
        let dataset = self.source.overview(selection.time_range)?;
        Ok(BrandOverview::build(&dataset, selection.time_range))
    }

    /// Builds the mention analytics view.
    pub fn mention_analytics(
        &self,
        selection: &FilterSelection,
    ) -> Result<MentionAnalytics, DataSourceError> {
        let spec = BreakdownSpec::MENTIONS;
        debug!(
            range = %selection.time_range,
            active_filters = selection.active_filter_count(),
            "building mention analytics"
        );
        let trends = self
            .source
            .trend_series(spec.metric, selection.time_range)?;
        let intent_rows = self.source.category_rows(spec.intent_table)?;
        let geography_rows = self.source.category_rows(spec.geography_table)?;
        let sources = self.source.mention_sources()?;
        Ok(MentionAnalytics::build(
            &trends,
            &intent_rows,
            &geography_rows,
            &sources,
            selection,
        ))
    }

    /// Builds the ranking analytics view.
    pub fn ranking_analytics(
        &self,
        selection: &FilterSelection,
    ) -> Result<MetricBreakdown, DataSourceError> {
        self.breakdown(BreakdownSpec::RANKINGS, selection)
    }

    /// Builds the perception analytics view.
    pub fn perception_analytics(
        &self,
        selection: &FilterSelection,
    ) -> Result<MetricBreakdown, DataSourceError> {
        self.breakdown(BreakdownSpec::PERCEPTION, selection)
    }

    /// Builds the citation analytics view under a sort state.
    pub fn citation_analytics(
        &self,
        sort: SortState<CitationSortKey>,
    ) -> Result<CitationAnalytics, DataSourceError> {
        debug!(key = ?sort.key, order = ?sort.order, "building citation analytics");
        let rows = self.source.citations()?;
        Ok(CitationAnalytics::build(&rows, sort))
    }

    fn breakdown(
        &self,
        spec: BreakdownSpec,
        selection: &FilterSelection,
    ) -> Result<MetricBreakdown, DataSourceError> {
        debug!(
            metric = %spec.metric,
            range = %selection.time_range,
            active_filters = selection.active_filter_count(),
            "building metric breakdown"
        );
        let trends = self
            .source
            .trend_series(spec.metric, selection.time_range)?;
        let intent_rows = self.source.category_rows(spec.intent_table)?;
        let geography_rows = self.source.category_rows(spec.geography_table)?;
        Ok(MetricBreakdown::build(
            spec,
            &trends,
            &intent_rows,
            &geography_rows,
            selection,
        ))
    }
}
