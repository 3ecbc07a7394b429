//! # larder-filter
//!
//! Multi-facet recipe filtering. `FilterState` lives in the settings
//! store (load at startup, save on change) and `FilterPipeline` evaluates
//! it as a short-circuit conjunction over enriched recipes.

pub mod pipeline;
pub mod state;

pub use pipeline::FilterPipeline;
pub use state::FilterStore;
