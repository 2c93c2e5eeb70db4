//! Adapters - concrete implementations of the ports.

pub mod fixtures;

pub use fixtures::FixtureDataSource;
