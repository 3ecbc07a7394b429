//! Ingredient match scoring: pure functions over a recipe's ingredient
//! list and the normalized pantry terms.
//!
//! Two scoring formulas coexist on purpose. `match_percentage` is the
//! fuzzy containment-based score used by the availability filter;
//! `calculate_match_score` is a plain present/missing ratio used by
//! shopping-list call sites. They disagree in edge cases and are kept
//! under distinct names.

pub mod scorer;
pub mod variations;

pub use scorer::{
    calculate_match_score, match_percentage, match_result, matched_count, missing_ingredients,
};
pub use variations::is_ingredient_match;
