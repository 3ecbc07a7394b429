//! Connection handling: one guarded writer plus a small set of pooled
//! readers over the same database file.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use larder_core::errors::LarderResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Both halves of the connection setup for one database. The writer
/// serializes mutations; readers are opened read-only and handed out
/// round-robin.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open writer and readers against the database file, applying the
    /// WAL pragmas to every connection.
    pub fn open(path: &Path, read_pool_size: usize) -> LarderResult<Self> {
        let writer = WriteConnection::open(path)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            writer,
            readers,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// In-memory pool for tests. Each `:memory:` connection is its own
    /// database, so the readers here never see the writer's rows; the
    /// engine routes all reads through the writer in this mode.
    pub fn open_in_memory(read_pool_size: usize) -> LarderResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        let readers = ReadPool::open_in_memory(read_pool_size)?;
        Ok(Self {
            writer,
            readers,
            db_path: None,
        })
    }
}
