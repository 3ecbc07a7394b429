use serde::{Deserialize, Serialize};

/// Outcome of scoring one recipe against the pantry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage of recipe ingredients matched, in [0.0, 100.0].
    /// Defined as 0 when the recipe has no ingredients or the pantry is empty.
    pub match_percentage: f32,
    /// Recipe ingredients with no pantry match, in original recipe order.
    pub missing_ingredients: Vec<String>,
    /// Complement of `missing_ingredients`, in original recipe order.
    pub present_ingredients: Vec<String>,
}

impl MatchResult {
    /// A result for the degenerate cases (no ingredients / empty pantry).
    pub fn empty() -> Self {
        Self {
            match_percentage: 0.0,
            missing_ingredients: Vec::new(),
            present_ingredients: Vec::new(),
        }
    }
}
