//! Filters module - Filter selection state and dimension vocabulary.
//!
//! The dimension enums are closed sets: every value the dashboard can
//! select exists as a variant, with the `All` sentinel meaning
//! "unconstrained". Unknown strings are rejected at the parsing
//! boundary, so the engine never sees an invalid dimension value.

mod dimension;
mod geography;
mod intent;
mod model;
mod multi_select;
mod persona;
mod selection;
mod time_range;

pub use dimension::Dimension;
pub use geography::GeographyFilter;
pub use intent::IntentFilter;
pub use model::ModelFilter;
pub use multi_select::toggle_all_sentinel;
pub use persona::PersonaFilter;
pub use selection::FilterSelection;
pub use time_range::{Granularity, TimeRange};
