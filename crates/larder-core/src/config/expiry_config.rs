use serde::{Deserialize, Serialize};

use super::defaults;

/// Expiry subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpiryConfig {
    /// Nominal period between scheduled expiry checks.
    pub period_hours: u64,
    /// Items within this many days of expiry classify as Expiring.
    pub expiring_window_days: i64,
    /// Expiring items within this many days count as critical.
    pub critical_threshold_days: i64,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            period_hours: defaults::DEFAULT_EXPIRY_PERIOD_HOURS,
            expiring_window_days: defaults::DEFAULT_EXPIRING_WINDOW_DAYS,
            critical_threshold_days: defaults::DEFAULT_CRITICAL_THRESHOLD_DAYS,
        }
    }
}
