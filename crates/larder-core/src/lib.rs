//! # larder-core
//!
//! Foundation crate for the Larder pantry system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LarderConfig;
pub use errors::{LarderError, LarderResult};
pub use models::{
    Cuisine, DietaryTag, Difficulty, EnrichedRecipe, FilterState, InventoryItem, MatchResult,
    RecipeRecord,
};
