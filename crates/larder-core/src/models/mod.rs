//! Data model for the Larder core.

pub mod alert;
pub mod filter_state;
pub mod inventory;
pub mod job;
pub mod match_result;
pub mod recipe;
pub mod status;

pub use alert::ExpiryAlert;
pub use filter_state::{
    AvailabilityFilter, DifficultyFilter, FilterState, TimeFilter,
};
pub use inventory::InventoryItem;
pub use job::{JobOutcome, JobRequest, SchedulePolicy};
pub use match_result::MatchResult;
pub use recipe::{Cuisine, DietaryTag, Difficulty, EnrichedRecipe, RecipeFlags, RecipeRecord};
pub use status::CorpusStatus;
