//! The scheduled expiry check: partition inventory into exact day
//! buckets and emit one grouped alert per non-empty bucket.

use std::sync::Arc;

use chrono::NaiveDate;

use larder_core::constants::{ALERT_SUMMARY_MAX_ITEMS, NOTIFY_ID_ONE_DAY, NOTIFY_ID_THREE_DAY};
use larder_core::errors::LarderResult;
use larder_core::models::{ExpiryAlert, InventoryItem, JobOutcome};
use larder_core::traits::{IInventoryStore, INotifier};

use crate::flexible::parse_flexible;

/// One scheduled run over the inventory.
///
/// Buckets are exact-match (`days_until == 3` and `== 1`), not ranges:
/// each item alerts at most twice over its lifetime rather than on every
/// run of its final week. The job keeps no state between runs.
pub struct ExpiryCheckJob {
    inventory: Arc<dyn IInventoryStore>,
    notifier: Arc<dyn INotifier>,
}

impl ExpiryCheckJob {
    pub fn new(inventory: Arc<dyn IInventoryStore>, notifier: Arc<dyn INotifier>) -> Self {
        Self {
            inventory,
            notifier,
        }
    }

    /// Execute one check against the given current day. Any failure maps
    /// to `Retry` for the external scheduler; there is no internal retry.
    pub fn run(&self, today: NaiveDate) -> JobOutcome {
        match self.check(today) {
            Ok(()) => JobOutcome::Success,
            Err(e) => {
                tracing::warn!(error = %e, "expiry check failed, reporting retry");
                JobOutcome::Retry
            }
        }
    }

    fn check(&self, today: NaiveDate) -> LarderResult<()> {
        let items = self.inventory.list()?;

        let mut three_day: Vec<&InventoryItem> = Vec::new();
        let mut one_day: Vec<&InventoryItem> = Vec::new();

        for item in &items {
            let Some(expiry) = item.expiry.as_deref() else {
                continue;
            };
            let Some(date) = parse_flexible(expiry) else {
                continue;
            };
            match (date - today).num_days() {
                3 => three_day.push(item),
                1 => one_day.push(item),
                _ => {}
            }
        }

        tracing::debug!(
            three_day = three_day.len(),
            one_day = one_day.len(),
            "expiry buckets computed"
        );

        if !three_day.is_empty() {
            self.notifier
                .notify(&build_alert(NOTIFY_ID_THREE_DAY, "Expiring in 3 days", &three_day))?;
        }
        if !one_day.is_empty() {
            self.notifier
                .notify(&build_alert(NOTIFY_ID_ONE_DAY, "Expiring tomorrow", &one_day))?;
        }
        Ok(())
    }
}

/// Grouped alert body: up to three `name (exp: date)` entries, then a
/// `+N more` overflow suffix.
fn build_alert(id: u32, title: &str, items: &[&InventoryItem]) -> ExpiryAlert {
    let entries: Vec<String> = items
        .iter()
        .take(ALERT_SUMMARY_MAX_ITEMS)
        .map(|item| {
            format!(
                "{} (exp: {})",
                item.name,
                item.expiry.as_deref().unwrap_or("")
            )
        })
        .collect();

    let mut body = entries.join(", ");
    if items.len() > ALERT_SUMMARY_MAX_ITEMS {
        body.push_str(&format!(" +{} more", items.len() - ALERT_SUMMARY_MAX_ITEMS));
    }

    ExpiryAlert {
        id,
        title: title.to_string(),
        body,
    }
}
