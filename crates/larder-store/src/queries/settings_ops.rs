//! Key-value settings.

use rusqlite::{params, Connection, OptionalExtension};

use larder_core::errors::LarderResult;

use crate::to_store_err;

pub fn get_setting(conn: &Connection, key: &str) -> LarderResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_store_err(e.to_string()))
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> LarderResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![key, value],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}
