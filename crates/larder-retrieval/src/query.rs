//! FTS5 MATCH expression construction.

/// Build a disjunctive prefix-match expression from pantry terms.
///
/// Each non-empty trimmed term becomes a quoted prefix token (`"term"*`)
/// and the tokens are OR-joined, so any single pantry match pulls a
/// recipe into the candidate set. Returns `None` when no usable term
/// remains; callers skip the query entirely in that case.
pub fn build_match_expression(terms: &[String]) -> Option<String> {
    let tokens: Vec<String> = terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| format!("\"{}\"*", t.replace('"', "\"\"")))
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" OR "))
    }
}
