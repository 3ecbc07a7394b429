//! Corpus count and bulk insertion.

use rusqlite::{params, Connection, Row};

use larder_core::errors::LarderResult;
use larder_core::models::RecipeRecord;

use crate::to_store_err;

/// Parse one row of `id, name, ingredients, steps` into a record.
pub(crate) fn parse_recipe_row(row: &Row<'_>) -> LarderResult<RecipeRecord> {
    let id: i64 = row.get(0).map_err(|e| to_store_err(e.to_string()))?;
    let name: String = row.get(1).map_err(|e| to_store_err(e.to_string()))?;
    let ingredients_json: String = row.get(2).map_err(|e| to_store_err(e.to_string()))?;
    let steps_json: String = row.get(3).map_err(|e| to_store_err(e.to_string()))?;

    let ingredients: Vec<String> =
        serde_json::from_str(&ingredients_json).map_err(|e| to_store_err(e.to_string()))?;
    let steps: Vec<String> =
        serde_json::from_str(&steps_json).map_err(|e| to_store_err(e.to_string()))?;

    Ok(RecipeRecord {
        id,
        name,
        ingredients,
        steps,
    })
}

/// Number of records in the corpus.
pub fn count_recipes(conn: &Connection) -> LarderResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
        .map_err(|e| to_store_err(e.to_string()))?;
    Ok(count as u64)
}

/// Insert a batch of records inside one transaction.
///
/// Records are keyed by name: re-inserting an existing name replaces its
/// ingredients and steps, so repeated ingestion runs converge instead of
/// duplicating the corpus. Records with a blank name are dropped.
pub fn bulk_insert(conn: &Connection, records: &[RecipeRecord]) -> LarderResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_store_err(format!("bulk_insert begin: {e}")))?;

    let mut inserted = 0;
    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO recipes (name, ingredients, steps) VALUES (?1, ?2, ?3)
                 ON CONFLICT(name) DO UPDATE SET
                     ingredients = excluded.ingredients,
                     steps = excluded.steps",
            )
            .map_err(|e| to_store_err(e.to_string()))?;

        for record in records {
            if record.name.trim().is_empty() {
                continue;
            }
            let ingredients = serde_json::to_string(&record.ingredients)
                .map_err(|e| to_store_err(e.to_string()))?;
            let steps =
                serde_json::to_string(&record.steps).map_err(|e| to_store_err(e.to_string()))?;
            stmt.execute(params![record.name, ingredients, steps])
                .map_err(|e| to_store_err(e.to_string()))?;
            inserted += 1;
        }
    }

    tx.commit()
        .map_err(|e| to_store_err(format!("bulk_insert commit: {e}")))?;
    Ok(inserted)
}
