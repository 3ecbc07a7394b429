//! Metadata inference: synthesizes cuisine, dietary tags, timing,
//! difficulty, rating, and flags for a corpus record.
//!
//! Everything except the nutrition calorie estimate is a pure function of
//! the recipe name and ingredient text, so enrichment is reproducible for
//! the same record across runs and processes. The facets are heuristic
//! placeholders, not ground truth.

pub mod cuisine;
pub mod dietary;
pub mod synth;

use larder_core::models::{Difficulty, EnrichedRecipe, RecipeFlags, RecipeRecord};

/// Minimum synthesized cooking time in minutes.
const MIN_COOKING_TIME_MINUTES: u32 = 15;

/// Keywords that mark a recipe as healthy.
const HEALTHY_KEYWORDS: [&str; 8] = [
    "vegetable", "fruit", "spinach", "broccoli", "carrot", "lean", "quinoa", "salmon",
];

/// Derive the full enriched view of a corpus record.
pub fn enrich(record: RecipeRecord) -> EnrichedRecipe {
    let name_folded = record.name.to_lowercase();
    let ingredient_text = record.ingredient_text();

    let cuisine = cuisine::infer_cuisine(&name_folded, &ingredient_text);
    let dietary_tags = dietary::infer_dietary_tags(&ingredient_text);

    let step_count = record.steps.len();
    let ingredient_count = record.ingredients.len();
    let draws = synth::draws_for(&record.name);

    let cooking_time_minutes =
        MIN_COOKING_TIME_MINUTES.max(step_count as u32 * 5 + draws.time_bonus);
    let difficulty = difficulty_for(step_count, ingredient_count);

    let flags = RecipeFlags {
        is_quick: cooking_time_minutes <= 30,
        is_healthy: HEALTHY_KEYWORDS.iter().any(|k| ingredient_text.contains(k)),
        is_popular: draws.rating >= 4.3 && draws.review_count >= 100,
        is_trending: draws.trending,
    };

    let nutrition_summary = format!("{} cal", synth::nutrition_calories(ingredient_count));

    EnrichedRecipe {
        record,
        cuisine,
        dietary_tags,
        cooking_time_minutes,
        difficulty,
        rating: draws.rating,
        review_count: draws.review_count,
        nutrition_summary,
        flags,
    }
}

/// Complexity is step count plus half the ingredient count.
pub fn difficulty_for(step_count: usize, ingredient_count: usize) -> Difficulty {
    let complexity = step_count + ingredient_count / 2;
    if complexity <= 6 {
        Difficulty::Easy
    } else if complexity <= 10 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}
