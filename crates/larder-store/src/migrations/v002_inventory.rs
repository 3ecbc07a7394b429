//! v002: Pantry inventory table.

use rusqlite::Connection;

use larder_core::errors::LarderResult;

use crate::to_store_err;

pub fn migrate(conn: &Connection) -> LarderResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS inventory (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            quantity   REAL NOT NULL DEFAULT 0,
            unit       TEXT NOT NULL DEFAULT '',
            expiry     TEXT,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_inventory_expiry ON inventory(expiry);
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}
