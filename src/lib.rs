//! BrandLens - AI Brand Visibility Analytics Engine
//!
//! This crate implements the filter-and-aggregate pipeline behind a
//! brand-analytics dashboard: time-range bucketing, multi-dimensional
//! filter selection, cross-dimension influence weighting, ranked tables,
//! and guideline completeness scoring.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
