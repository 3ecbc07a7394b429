//! Dietary tag inference from ingredient text.

use std::collections::BTreeSet;

use larder_core::models::DietaryTag;

const MEAT_KEYWORDS: [&str; 4] = ["meat", "chicken", "beef", "pork"];
const ANIMAL_PRODUCT_KEYWORDS: [&str; 4] = ["dairy", "cheese", "milk", "egg"];
const GLUTEN_KEYWORDS: [&str; 3] = ["wheat", "flour", "bread"];
const DAIRY_KEYWORDS: [&str; 3] = ["milk", "cheese", "butter"];
const CARB_KEYWORDS: [&str; 4] = ["pasta", "rice", "bread", "potato"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Infer the set of dietary tags satisfied by the ingredient text.
///
/// Tags are exclusion-based: a recipe is tagged when none of the keywords
/// that would disqualify it appear. Vegan implies vegetarian.
pub fn infer_dietary_tags(ingredient_text: &str) -> BTreeSet<DietaryTag> {
    let mut tags = BTreeSet::new();

    if !contains_any(ingredient_text, &MEAT_KEYWORDS) {
        tags.insert(DietaryTag::Vegetarian);
        if !contains_any(ingredient_text, &ANIMAL_PRODUCT_KEYWORDS) {
            tags.insert(DietaryTag::Vegan);
        }
    }
    if !contains_any(ingredient_text, &GLUTEN_KEYWORDS) {
        tags.insert(DietaryTag::GlutenFree);
    }
    if !contains_any(ingredient_text, &DAIRY_KEYWORDS) {
        tags.insert(DietaryTag::DairyFree);
    }
    if !contains_any(ingredient_text, &CARB_KEYWORDS) {
        tags.insert(DietaryTag::LowCarb);
    }

    tags
}
