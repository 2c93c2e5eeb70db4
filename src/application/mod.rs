//! Application layer - services orchestrating ports and domain logic.

mod analytics;

pub use analytics::AnalyticsService;
