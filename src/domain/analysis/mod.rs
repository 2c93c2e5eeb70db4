//! Analysis module - Pure aggregation services.
//!
//! Every function here is deterministic and side-effect free: it
//! receives immutable inputs and returns a freshly constructed output.
//! The owning screen may call them on every interaction; no caching is
//! required for correctness.

mod completeness;
mod dataset;
mod influence;
mod series;
mod sort;

pub use completeness::{
    check_coverage, completeness, guideline_points, GuidelineCoverage, BEHAVIORAL_POINTS,
    DEMOGRAPHIC_POINTS,
};
pub use dataset::{
    BaseRow, CitationCount, CitationRow, DerivedRow, OverviewDataset, SourceShare, TrendSeriesSet,
};
pub use influence::{apply_influence, composed_factor, factor, TableKind};
pub use series::{select_series, ChartData, ChartSeries, WeightedSeries};
pub use sort::{sort_rows, SortOrder, SortState};
