use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One corpus entry. Immutable once ingested; replaced wholesale only by
/// re-ingestion. Ingredients are lowercased and trimmed at ingestion time,
/// steps are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Surrogate row id assigned by the store (0 before insertion).
    pub id: i64,
    /// Non-empty recipe name. Records with an empty name are never stored.
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl RecipeRecord {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>, steps: Vec<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            ingredients,
            steps,
        }
    }

    /// Ingredient text joined for keyword scans, case-folded.
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join(" ").to_lowercase()
    }
}

/// Cuisine inferred from recipe text. First matching rule wins; American is
/// the fallback when nothing else matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    Italian,
    Asian,
    Mexican,
    Indian,
    Mediterranean,
    American,
}

impl Cuisine {
    pub const ALL: [Cuisine; 6] = [
        Cuisine::Italian,
        Cuisine::Asian,
        Cuisine::Mexican,
        Cuisine::Indian,
        Cuisine::Mediterranean,
        Cuisine::American,
    ];
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cuisine::Italian => "Italian",
            Cuisine::Asian => "Asian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::American => "American",
        };
        f.write_str(name)
    }
}

/// Dietary tags are independent: a recipe may carry any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    LowCarb,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 5] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::GlutenFree,
        DietaryTag::DairyFree,
        DietaryTag::LowCarb,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Boolean facets synthesized alongside the numeric metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFlags {
    pub is_quick: bool,
    pub is_healthy: bool,
    pub is_popular: bool,
    pub is_trending: bool,
}

/// A corpus record plus synthesized facets. Derived on every retrieval,
/// never persisted; deterministic per recipe name except the nutrition
/// calorie estimate (see larder-enrich).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecipe {
    pub record: RecipeRecord,
    pub cuisine: Cuisine,
    pub dietary_tags: BTreeSet<DietaryTag>,
    pub cooking_time_minutes: u32,
    pub difficulty: Difficulty,
    /// Synthesized rating in [0.0, 5.0].
    pub rating: f32,
    pub review_count: u32,
    pub nutrition_summary: String,
    pub flags: RecipeFlags,
}

impl EnrichedRecipe {
    /// Step count used by the step-count-proxy filters.
    pub fn step_count(&self) -> usize {
        self.record.steps.len()
    }
}
