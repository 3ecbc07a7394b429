//! StoreEngine — owns the ConnectionPool and implements the recipe,
//! inventory, and settings store traits.

use std::path::Path;

use larder_core::errors::LarderResult;
use larder_core::models::{InventoryItem, RecipeRecord};
use larder_core::traits::{IInventoryStore, IRecipeStore, ISettingsStore};

use crate::migrations;
use crate::pool::{ConnectionPool, ReadPool};
use crate::queries;

/// The main storage engine. Owns the connection pool and provides the
/// full IRecipeStore + IInventoryStore + ISettingsStore interface.
pub struct StoreEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StoreEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> LarderResult<Self> {
        let pool = ConnectionPool::open(path, ReadPool::default_size())?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    /// Routes all reads through the writer since in-memory read pool
    /// connections are isolated databases that can't see writer's changes.
    pub fn open_in_memory() -> LarderResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations on the write connection.
    fn initialize(&self) -> LarderResult<()> {
        self.pool
            .writer
            .with_conn(|conn| migrations::run_migrations(conn))
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer (read pool is isolated).
    fn with_reader<F, T>(&self, f: F) -> LarderResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> LarderResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl IRecipeStore for StoreEngine {
    fn count(&self) -> LarderResult<u64> {
        self.with_reader(queries::recipe_ops::count_recipes)
    }

    fn insert_bulk(&self, records: &[RecipeRecord]) -> LarderResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| queries::recipe_ops::bulk_insert(conn, records))
    }

    fn search(&self, match_expr: &str, limit: usize) -> LarderResult<Vec<RecipeRecord>> {
        self.with_reader(|conn| queries::recipe_search::search_recipes(conn, match_expr, limit))
    }
}

impl IInventoryStore for StoreEngine {
    fn list(&self) -> LarderResult<Vec<InventoryItem>> {
        self.with_reader(queries::inventory_ops::list_items)
    }

    fn insert(&self, item: &InventoryItem) -> LarderResult<i64> {
        self.pool
            .writer
            .with_conn(|conn| queries::inventory_ops::insert_item(conn, item))
    }

    fn update(&self, item: &InventoryItem) -> LarderResult<()> {
        self.pool
            .writer
            .with_conn(|conn| queries::inventory_ops::update_item(conn, item))
    }

    fn delete(&self, id: i64) -> LarderResult<()> {
        self.pool
            .writer
            .with_conn(|conn| queries::inventory_ops::delete_item(conn, id))
    }
}

impl ISettingsStore for StoreEngine {
    fn get(&self, key: &str) -> LarderResult<Option<String>> {
        self.with_reader(|conn| queries::settings_ops::get_setting(conn, key))
    }

    fn set(&self, key: &str, value: &str) -> LarderResult<()> {
        self.pool
            .writer
            .with_conn(|conn| queries::settings_ops::set_setting(conn, key, value))
    }
}
