//! Per-ingredient match predicate, tolerant of common name variations.

/// Qualifier words that never affect whether two ingredient names refer to
/// the same thing.
pub const QUALIFIER_STOPLIST: [&str; 8] = [
    "fresh", "dried", "ground", "whole", "chopped", "sliced", "diced", "minced",
];

/// Whether a recipe ingredient and a pantry term refer to the same
/// ingredient. Both inputs are expected case-folded and trimmed.
///
/// Matches on exact equality, containment in either direction, or
/// equality/containment after stripping the qualifier stoplist from both.
pub fn is_ingredient_match(recipe_ingredient: &str, pantry_term: &str) -> bool {
    if recipe_ingredient == pantry_term {
        return true;
    }
    if recipe_ingredient.contains(pantry_term) || pantry_term.contains(recipe_ingredient) {
        return true;
    }
    matches_after_stripping(recipe_ingredient, pantry_term)
}

fn matches_after_stripping(a: &str, b: &str) -> bool {
    let cleaned_a = strip_qualifiers(a);
    let cleaned_b = strip_qualifiers(b);
    if cleaned_a == cleaned_b {
        return true;
    }
    cleaned_a.contains(&cleaned_b) || cleaned_b.contains(&cleaned_a)
}

/// Remove stoplist words at word granularity and re-join with single spaces.
pub fn strip_qualifiers(term: &str) -> String {
    term.split_whitespace()
        .filter(|word| !QUALIFIER_STOPLIST.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
