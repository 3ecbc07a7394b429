//! Recipe-level scoring built on the per-ingredient predicate.

use larder_core::models::MatchResult;

use crate::variations::is_ingredient_match;

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

fn normalized_pantry(pantry_terms: &[String]) -> Vec<String> {
    pantry_terms.iter().map(|t| normalize(t)).collect()
}

fn has_pantry_match(ingredient: &str, pantry: &[String]) -> bool {
    let normalized = normalize(ingredient);
    pantry.iter().any(|term| is_ingredient_match(&normalized, term))
}

/// Fuzzy availability score in [0.0, 100.0]. Defined as 0 when the recipe
/// has no ingredients or the pantry is empty.
pub fn match_percentage(ingredients: &[String], pantry_terms: &[String]) -> f32 {
    if ingredients.is_empty() || pantry_terms.is_empty() {
        return 0.0;
    }
    let matched = matched_count(ingredients, pantry_terms);
    matched as f32 / ingredients.len() as f32 * 100.0
}

/// Number of recipe ingredients with at least one pantry match.
pub fn matched_count(ingredients: &[String], pantry_terms: &[String]) -> usize {
    if ingredients.is_empty() || pantry_terms.is_empty() {
        return 0;
    }
    let pantry = normalized_pantry(pantry_terms);
    ingredients
        .iter()
        .filter(|ingredient| has_pantry_match(ingredient, &pantry))
        .count()
}

/// Ingredients with no pantry match, in original recipe order.
/// An empty pantry makes every ingredient missing.
pub fn missing_ingredients(ingredients: &[String], pantry_terms: &[String]) -> Vec<String> {
    if pantry_terms.is_empty() {
        return ingredients.to_vec();
    }
    let pantry = normalized_pantry(pantry_terms);
    ingredients
        .iter()
        .filter(|ingredient| !has_pantry_match(ingredient, &pantry))
        .cloned()
        .collect()
}

/// Full scoring outcome: percentage plus the present/missing partition.
pub fn match_result(ingredients: &[String], pantry_terms: &[String]) -> MatchResult {
    if ingredients.is_empty() {
        return MatchResult::empty();
    }
    if pantry_terms.is_empty() {
        return MatchResult {
            match_percentage: 0.0,
            missing_ingredients: ingredients.to_vec(),
            present_ingredients: Vec::new(),
        };
    }

    let pantry = normalized_pantry(pantry_terms);
    let mut present = Vec::new();
    let mut missing = Vec::new();
    for ingredient in ingredients {
        if has_pantry_match(ingredient, &pantry) {
            present.push(ingredient.clone());
        } else {
            missing.push(ingredient.clone());
        }
    }

    MatchResult {
        match_percentage: present.len() as f32 / ingredients.len() as f32 * 100.0,
        missing_ingredients: missing,
        present_ingredients: present,
    }
}

/// Plain ratio |present| / (|present| + |missing|), in [0.0, 1.0].
/// Used by call sites that already hold a present/missing partition.
pub fn calculate_match_score(present: &[String], missing: &[String]) -> f64 {
    let total = present.len() + missing.len();
    if total == 0 {
        return 0.0;
    }
    present.len() as f64 / total as f64
}
