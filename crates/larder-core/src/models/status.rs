use serde::{Deserialize, Serialize};

/// Corpus readiness, so callers can poll instead of inferring state from
/// incidental empty results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusStatus {
    /// No records and no ingestion underway.
    Empty,
    /// Ingestion has been requested and is running.
    Importing,
    /// Records are available for search.
    Ready,
}
