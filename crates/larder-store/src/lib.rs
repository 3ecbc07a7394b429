//! # larder-store
//!
//! SQLite persistence for the recipe corpus, pantry inventory, and
//! key-value settings. Single write connection, round-robin read pool,
//! versioned migrations, FTS5 corpus index, and JSONL dataset ingestion.

pub mod engine;
pub mod ingest;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StoreEngine;
pub use ingest::{ingest_dataset, ingest_if_needed, IngestReport, RECIPES_IMPORTED_KEY};

use larder_core::errors::{LarderError, StoreError};

/// Wrap a low-level error message as a storage error.
pub fn to_store_err(message: impl Into<String>) -> LarderError {
    LarderError::Store(StoreError::SqliteError {
        message: message.into(),
    })
}
