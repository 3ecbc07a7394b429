//! FTS5 corpus search.

use rusqlite::{params, Connection};

use larder_core::errors::LarderResult;
use larder_core::models::RecipeRecord;

use super::recipe_ops::parse_recipe_row;
use crate::to_store_err;

/// Search the corpus with a prebuilt FTS5 MATCH expression.
///
/// Ordering is by recipe name, not relevance rank: callers re-score the
/// results against the pantry, so relevance here would be wasted work and
/// name order keeps pagination stable.
pub fn search_recipes(
    conn: &Connection,
    match_expr: &str,
    limit: usize,
) -> LarderResult<Vec<RecipeRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT r.id, r.name, r.ingredients, r.steps
             FROM recipe_fts fts
             JOIN recipes r ON r.id = fts.rowid
             WHERE recipe_fts MATCH ?1
             ORDER BY r.name ASC
             LIMIT ?2",
        )
        .map_err(|e| to_store_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![match_expr, limit as i64], |row| {
            Ok(parse_recipe_row(row))
        })
        .map_err(|e| to_store_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let record = row.map_err(|e| to_store_err(e.to_string()))??;
        results.push(record);
    }
    Ok(results)
}
