//! Ports - boundary traits the application layer depends on.

mod analytics_source;

pub use analytics_source::{AnalyticsDataSource, DataSourceError};
