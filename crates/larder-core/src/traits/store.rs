use crate::errors::LarderResult;
use crate::models::{InventoryItem, RecipeRecord};

/// The recipe corpus: bulk insertion plus full-text term queries.
pub trait IRecipeStore: Send + Sync {
    /// Number of records currently in the corpus.
    fn count(&self) -> LarderResult<u64>;

    /// Insert a batch of records. Returns the number inserted.
    /// Batches are sequential, never concurrent (single-writer discipline).
    fn insert_bulk(&self, records: &[RecipeRecord]) -> LarderResult<usize>;

    /// Full-text search with a prebuilt MATCH expression.
    /// Results are ordered by name ascending.
    fn search(&self, match_expr: &str, limit: usize) -> LarderResult<Vec<RecipeRecord>>;
}

/// User-owned pantry inventory. The expiry job only reads it.
pub trait IInventoryStore: Send + Sync {
    fn list(&self) -> LarderResult<Vec<InventoryItem>>;

    /// Insert, returning the assigned surrogate id.
    fn insert(&self, item: &InventoryItem) -> LarderResult<i64>;

    fn update(&self, item: &InventoryItem) -> LarderResult<()>;

    fn delete(&self, id: i64) -> LarderResult<()>;
}

/// Process-wide key-value settings (filter state, ingestion flag).
pub trait ISettingsStore: Send + Sync {
    fn get(&self, key: &str) -> LarderResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> LarderResult<()>;

    fn get_bool(&self, key: &str) -> LarderResult<bool> {
        Ok(self.get(key)?.is_some_and(|v| v == "true"))
    }

    fn set_bool(&self, key: &str, value: bool) -> LarderResult<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}
