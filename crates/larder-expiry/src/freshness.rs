//! Strict freshness classification for inventory expiry dates.

use chrono::NaiveDate;

use larder_core::config::ExpiryConfig;

/// Accepted expiry formats, tried in order. Day-first wins the
/// `03/04/2026` ambiguity.
pub const STRICT_PATTERNS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Freshness of one inventory item at day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessStatus {
    Fresh,
    /// Within the expiring window (inclusive), today counts.
    Expiring,
    Expired,
    /// Absent, empty, or unparseable expiry date.
    Unknown,
}

/// Parse an expiry string against the strict pattern list.
pub fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    STRICT_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(raw, pattern).ok())
}

/// Classifier with a configurable expiring window and critical threshold.
#[derive(Debug, Clone, Copy)]
pub struct FreshnessClassifier {
    window_days: i64,
    critical_days: i64,
}

impl Default for FreshnessClassifier {
    fn default() -> Self {
        Self::from_config(&ExpiryConfig::default())
    }
}

impl FreshnessClassifier {
    pub fn from_config(config: &ExpiryConfig) -> Self {
        Self {
            window_days: config.expiring_window_days,
            critical_days: config.critical_threshold_days,
        }
    }

    /// Signed days until expiry, independent of classification.
    /// Negative once the date has passed.
    pub fn days_until_expiry(&self, expiry: Option<&str>, today: NaiveDate) -> Option<i64> {
        let date = expiry.and_then(parse_expiry)?;
        Some((date - today).num_days())
    }

    /// Classify an expiry string relative to `today`.
    pub fn classify(&self, expiry: Option<&str>, today: NaiveDate) -> FreshnessStatus {
        match self.days_until_expiry(expiry, today) {
            None => FreshnessStatus::Unknown,
            Some(days) if days < 0 => FreshnessStatus::Expired,
            Some(days) if days <= self.window_days => FreshnessStatus::Expiring,
            Some(_) => FreshnessStatus::Fresh,
        }
    }

    /// Expired, or expiring within the critical threshold.
    pub fn is_critical(&self, expiry: Option<&str>, today: NaiveDate) -> bool {
        match self.days_until_expiry(expiry, today) {
            None => false,
            Some(days) => days <= self.critical_days,
        }
    }
}
