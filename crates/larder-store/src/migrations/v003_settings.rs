//! v003: Key-value settings table (filter state, ingestion flag).

use rusqlite::Connection;

use larder_core::errors::LarderResult;

use crate::to_store_err;

pub fn migrate(conn: &Connection) -> LarderResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS settings (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}
