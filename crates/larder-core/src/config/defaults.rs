//! Default values shared between config structs.

use crate::constants;

pub const DEFAULT_DATASET_PATH: &str = "assets/recipes.jsonl.gz";
pub const DEFAULT_INGEST_BATCH_SIZE: usize = constants::INGEST_BATCH_SIZE;
pub const DEFAULT_SEARCH_LIMIT: usize = constants::SEARCH_RESULT_LIMIT;
pub const DEFAULT_EXPIRY_PERIOD_HOURS: u64 = 24;
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = constants::EXPIRING_WINDOW_DAYS;
pub const DEFAULT_CRITICAL_THRESHOLD_DAYS: i64 = 1;
