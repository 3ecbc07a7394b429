/// Corpus ingestion errors.
///
/// Only stream-level I/O is fatal for an ingestion run. Malformed
/// individual lines are skipped and counted, never surfaced here.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("corpus stream unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus dataset missing: {path}")]
    DatasetMissing { path: String },
}
