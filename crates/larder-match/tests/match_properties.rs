use larder_match::{match_percentage, match_result, matched_count};
use proptest::prelude::*;

fn arb_term() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}"
}

fn arb_terms(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_term(), 0..max)
}

proptest! {
    // ── Percentage bounded to [0, 100] ───────────────────────────────────

    #[test]
    fn percentage_bounded(
        ingredients in arb_terms(8),
        pantry in arb_terms(8),
    ) {
        let pct = match_percentage(&ingredients, &pantry);
        prop_assert!((0.0..=100.0).contains(&pct), "out of bounds: {pct}");
    }

    #[test]
    fn percentage_zero_for_degenerate_inputs(terms in arb_terms(8)) {
        prop_assert_eq!(match_percentage(&[], &terms), 0.0);
        prop_assert_eq!(match_percentage(&terms, &[]), 0.0);
    }

    // ── Present/missing partition the ingredient list ────────────────────

    #[test]
    fn result_partitions_ingredients(
        ingredients in arb_terms(8),
        pantry in arb_terms(8),
    ) {
        let result = match_result(&ingredients, &pantry);
        prop_assert_eq!(
            result.present_ingredients.len() + result.missing_ingredients.len(),
            ingredients.len()
        );
    }

    #[test]
    fn matched_count_never_exceeds_total(
        ingredients in arb_terms(8),
        pantry in arb_terms(8),
    ) {
        prop_assert!(matched_count(&ingredients, &pantry) <= ingredients.len());
    }
}
