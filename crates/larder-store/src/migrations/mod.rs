//! Versioned schema migrations, gated on `PRAGMA user_version`.

pub mod v001_recipes;
pub mod v002_inventory;
pub mod v003_settings;

use rusqlite::Connection;

use larder_core::errors::{LarderError, LarderResult, StoreError};

use crate::to_store_err;

type Migration = fn(&Connection) -> LarderResult<()>;

const MIGRATIONS: [(u32, Migration); 3] = [
    (1, v001_recipes::migrate),
    (2, v002_inventory::migrate),
    (3, v003_settings::migrate),
];

/// Apply all migrations newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> LarderResult<()> {
    let current: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_store_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        migrate(conn).map_err(|e| {
            LarderError::Store(StoreError::MigrationFailed {
                version,
                reason: e.to_string(),
            })
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_store_err(e.to_string()))?;
        tracing::info!(version, "applied schema migration");
    }
    Ok(())
}

/// Current schema version of the database.
pub fn schema_version(conn: &Connection) -> LarderResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_store_err(e.to_string()))
}
