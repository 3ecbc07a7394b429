/// Larder system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of records per ingestion batch.
pub const INGEST_BATCH_SIZE: usize = 1000;

/// Maximum number of records returned by a corpus search.
pub const SEARCH_RESULT_LIMIT: usize = 200;

/// Items this many days or fewer from expiry are classified Expiring.
pub const EXPIRING_WINDOW_DAYS: i64 = 7;

/// Maximum item names listed in a grouped expiry alert body.
pub const ALERT_SUMMARY_MAX_ITEMS: usize = 3;

/// Notification identifier for the three-days-until-expiry bucket.
pub const NOTIFY_ID_THREE_DAY: u32 = 1003;

/// Notification identifier for the one-day-until-expiry bucket.
pub const NOTIFY_ID_ONE_DAY: u32 = 1002;
