use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate};
use larder_core::errors::{LarderError, LarderResult, StoreError};
use larder_core::models::{ExpiryAlert, InventoryItem, JobOutcome};
use larder_core::traits::{IInventoryStore, INotifier};
use larder_expiry::ExpiryCheckJob;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()
}

fn item_expiring_in(name: &str, days: i64) -> InventoryItem {
    let expiry = (today() + Duration::days(days)).format("%d/%m/%Y").to_string();
    InventoryItem::new(name, 1.0, "pcs").with_expiry(expiry)
}

struct FakeInventory {
    items: Vec<InventoryItem>,
    fail: bool,
}

impl FakeInventory {
    fn with_items(items: Vec<InventoryItem>) -> Arc<Self> {
        Arc::new(Self { items, fail: false })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            items: Vec::new(),
            fail: true,
        })
    }
}

impl IInventoryStore for FakeInventory {
    fn list(&self) -> LarderResult<Vec<InventoryItem>> {
        if self.fail {
            return Err(LarderError::Store(StoreError::SqliteError {
                message: "disk I/O error".to_string(),
            }));
        }
        Ok(self.items.clone())
    }

    fn insert(&self, _item: &InventoryItem) -> LarderResult<i64> {
        Ok(1)
    }

    fn update(&self, _item: &InventoryItem) -> LarderResult<()> {
        Ok(())
    }

    fn delete(&self, _id: i64) -> LarderResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeNotifier {
    sent: Mutex<Vec<ExpiryAlert>>,
    fail: AtomicBool,
}

impl INotifier for FakeNotifier {
    fn notify(&self, alert: &ExpiryAlert) -> LarderResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(LarderError::Store(StoreError::SqliteError {
                message: "channel unavailable".to_string(),
            }));
        }
        self.sent.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

// ── Bucket partitioning ──────────────────────────────────────────────────

#[test]
fn partitions_into_exact_three_and_one_day_buckets() {
    let inventory = FakeInventory::with_items(vec![
        item_expiring_in("Milk", 1),
        item_expiring_in("Yogurt", 2),
        item_expiring_in("Chicken", 3),
        item_expiring_in("Spinach", 3),
        item_expiring_in("Butter", 5),
    ]);
    let notifier = Arc::new(FakeNotifier::default());
    let job = ExpiryCheckJob::new(inventory, notifier.clone());

    assert_eq!(job.run(today()), JobOutcome::Success);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].id, 1003);
    assert_eq!(sent[0].title, "Expiring in 3 days");
    assert_eq!(
        sent[0].body,
        "Chicken (exp: 03/09/2026), Spinach (exp: 03/09/2026)"
    );

    assert_eq!(sent[1].id, 1002);
    assert_eq!(sent[1].title, "Expiring tomorrow");
    assert_eq!(sent[1].body, "Milk (exp: 01/09/2026)");
}

#[test]
fn empty_buckets_emit_nothing() {
    let inventory = FakeInventory::with_items(vec![
        item_expiring_in("Yogurt", 2),
        item_expiring_in("Butter", 5),
        item_expiring_in("Old Cheese", -1),
    ]);
    let notifier = Arc::new(FakeNotifier::default());
    let job = ExpiryCheckJob::new(inventory, notifier.clone());

    assert_eq!(job.run(today()), JobOutcome::Success);
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[test]
fn overflow_gets_a_more_suffix() {
    let inventory = FakeInventory::with_items(vec![
        item_expiring_in("A", 3),
        item_expiring_in("B", 3),
        item_expiring_in("C", 3),
        item_expiring_in("D", 3),
        item_expiring_in("E", 3),
    ]);
    let notifier = Arc::new(FakeNotifier::default());
    let job = ExpiryCheckJob::new(inventory, notifier.clone());

    job.run(today());

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        "A (exp: 03/09/2026), B (exp: 03/09/2026), C (exp: 03/09/2026) +2 more"
    );
}

#[test]
fn unparseable_or_missing_expiries_are_skipped() {
    let inventory = FakeInventory::with_items(vec![
        InventoryItem::new("No Date", 1.0, "pcs"),
        InventoryItem::new("Bad Date", 1.0, "pcs").with_expiry("whenever"),
        item_expiring_in("Milk", 1),
    ]);
    let notifier = Arc::new(FakeNotifier::default());
    let job = ExpiryCheckJob::new(inventory, notifier.clone());

    assert_eq!(job.run(today()), JobOutcome::Success);
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].id, 1002);
}

#[test]
fn tolerant_parsing_applies_to_bucket_dates() {
    let inventory = FakeInventory::with_items(vec![
        InventoryItem::new("Milk", 1.0, "l").with_expiry("01 - 09 - 2026"),
        InventoryItem::new("Eggs", 12.0, "pcs").with_expiry("03.09.2026"),
        InventoryItem::new("Yogurt", 4.0, "pcs").with_expiry("03/09/26"),
    ]);
    let notifier = Arc::new(FakeNotifier::default());
    let job = ExpiryCheckJob::new(inventory, notifier.clone());

    job.run(today());

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    // Two-digit years resolve to the current century, so Yogurt lands in
    // the three-day bucket alongside Eggs.
    assert_eq!(sent[0].body, "Eggs (exp: 03.09.2026), Yogurt (exp: 03/09/26)");
    assert_eq!(sent[1].body, "Milk (exp: 01 - 09 - 2026)");
}

// ── Failure handling ─────────────────────────────────────────────────────

#[test]
fn inventory_failure_reports_retry() {
    let notifier = Arc::new(FakeNotifier::default());
    let job = ExpiryCheckJob::new(FakeInventory::failing(), notifier.clone());

    assert_eq!(job.run(today()), JobOutcome::Retry);
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[test]
fn notifier_failure_reports_retry() {
    let inventory = FakeInventory::with_items(vec![item_expiring_in("Milk", 1)]);
    let notifier = Arc::new(FakeNotifier::default());
    notifier.fail.store(true, Ordering::SeqCst);
    let job = ExpiryCheckJob::new(inventory, notifier);

    assert_eq!(job.run(today()), JobOutcome::Retry);
}
