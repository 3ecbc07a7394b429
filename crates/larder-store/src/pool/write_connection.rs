//! Single write connection behind a mutex.
//! Serialized writes — no contention.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use larder_core::errors::LarderResult;

use super::pragmas::apply_pragmas;
use crate::to_store_err;

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path) -> LarderResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_store_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> LarderResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> LarderResult<T>
    where
        F: FnOnce(&Connection) -> LarderResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_store_err(format!("write lock poisoned: {e}")))?;
        f(&guard)
    }
}
