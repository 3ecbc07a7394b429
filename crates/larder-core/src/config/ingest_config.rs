use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Path to the line-delimited corpus dataset (plain or gzipped).
    pub dataset_path: String,
    /// Records per insert batch.
    pub batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            dataset_path: defaults::DEFAULT_DATASET_PATH.to_string(),
            batch_size: defaults::DEFAULT_INGEST_BATCH_SIZE,
        }
    }
}
