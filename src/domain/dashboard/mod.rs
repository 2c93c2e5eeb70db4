//! Dashboard module - Derived views consumed by the presentation layer.
//!
//! Every view here is a pure function of (dataset, selection): the
//! screens call the builders on each interaction and render the result.

pub mod breakdown;
pub mod citations;
pub mod filter_summary;
pub mod mentions;
pub mod overview;

pub use breakdown::{BreakdownSpec, MetricBreakdown};
pub use citations::{CitationAnalytics, CitationSortKey};
pub use filter_summary::FilterSummary;
pub use mentions::MentionAnalytics;
pub use overview::BrandOverview;
