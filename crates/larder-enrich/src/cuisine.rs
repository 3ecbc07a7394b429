//! Cuisine inference from recipe name and ingredient keywords.

use larder_core::models::Cuisine;

/// Inference order for [`infer_cuisine`]. American is the fallback and
/// carries no keywords of its own.
const RULE_ORDER: [Cuisine; 5] = [
    Cuisine::Italian,
    Cuisine::Asian,
    Cuisine::Mexican,
    Cuisine::Indian,
    Cuisine::Mediterranean,
];

/// Per-cuisine keyword predicate over the folded name and ingredient text.
///
/// A recipe can satisfy several cuisines at once; facet filtering accepts
/// a recipe when any selected cuisine matches. [`Cuisine::American`]
/// matches only recipes no other rule claims.
pub fn matches_cuisine(name_folded: &str, ingredient_text: &str, cuisine: Cuisine) -> bool {
    match cuisine {
        Cuisine::Italian => {
            name_folded.contains("pasta")
                || name_folded.contains("pizza")
                || ingredient_text.contains("parmesan")
                || ingredient_text.contains("basil")
        }
        Cuisine::Asian => {
            name_folded.contains("stir")
                || name_folded.contains("asian")
                || ingredient_text.contains("soy sauce")
                || ingredient_text.contains("ginger")
        }
        Cuisine::Mexican => {
            name_folded.contains("taco")
                || name_folded.contains("burrito")
                || ingredient_text.contains("cumin")
                || ingredient_text.contains("cilantro")
        }
        Cuisine::Indian => name_folded.contains("curry") || ingredient_text.contains("turmeric"),
        Cuisine::Mediterranean => {
            ingredient_text.contains("olive oil") || ingredient_text.contains("feta")
        }
        Cuisine::American => !RULE_ORDER
            .iter()
            .any(|&c| matches_cuisine(name_folded, ingredient_text, c)),
    }
}

/// Infer a single cuisine from the lowercased recipe name and ingredient
/// text.
///
/// Rules are checked in a fixed order and the first hit wins, so a recipe
/// that mentions both pasta and soy sauce classifies as Italian. Recipes
/// matching no rule fall back to [`Cuisine::American`].
pub fn infer_cuisine(name_folded: &str, ingredient_text: &str) -> Cuisine {
    RULE_ORDER
        .into_iter()
        .find(|&c| matches_cuisine(name_folded, ingredient_text, c))
        .unwrap_or(Cuisine::American)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rule_wins_over_later_rules() {
        // Pasta plus soy sauce still classifies as Italian.
        assert_eq!(infer_cuisine("pasta stir fry", "soy sauce, pasta"), Cuisine::Italian);
    }

    #[test]
    fn falls_back_to_american() {
        assert_eq!(infer_cuisine("meatloaf", "beef, onion"), Cuisine::American);
    }

    #[test]
    fn ingredient_only_keywords_apply() {
        assert_eq!(infer_cuisine("weeknight bowl", "rice, ginger, scallion"), Cuisine::Asian);
        assert_eq!(infer_cuisine("salad", "feta, olives"), Cuisine::Mediterranean);
    }

    #[test]
    fn a_recipe_can_match_several_cuisines() {
        let name = "pasta stir fry";
        let ingredients = "pasta, soy sauce, ginger";
        assert!(matches_cuisine(name, ingredients, Cuisine::Italian));
        assert!(matches_cuisine(name, ingredients, Cuisine::Asian));
        assert!(!matches_cuisine(name, ingredients, Cuisine::Mexican));
        assert_eq!(infer_cuisine(name, ingredients), Cuisine::Italian);
    }

    #[test]
    fn american_matches_only_unclaimed_recipes() {
        assert!(matches_cuisine("meatloaf", "beef, onion", Cuisine::American));
        assert!(!matches_cuisine("penne pasta", "penne, tomato", Cuisine::American));
    }
}
