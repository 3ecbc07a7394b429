//! Error taxonomy for the Larder workspace.
//!
//! Each subsystem gets its own enum; `LarderError` aggregates them so every
//! public API can return a single `LarderResult<T>`.

pub mod ingest_error;
pub mod store_error;

pub use ingest_error::IngestError;
pub use store_error::StoreError;

/// Top-level error for all Larder operations.
#[derive(Debug, thiserror::Error)]
pub enum LarderError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("inventory item not found: {id}")]
    ItemNotFound { id: i64 },

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}

pub type LarderResult<T> = Result<T, LarderError>;
