use chrono::{Duration, NaiveDate};
use larder_core::config::ExpiryConfig;
use larder_expiry::{FreshnessClassifier, FreshnessStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()
}

fn offset_str(days: i64) -> String {
    (today() + Duration::days(days)).format("%d/%m/%Y").to_string()
}

// ── Strict pattern acceptance ────────────────────────────────────────────

#[test]
fn all_four_strict_formats_parse() {
    let classifier = FreshnessClassifier::default();
    let base = today();

    for raw in ["10/09/2026", "2026-09-10", "10-09-2026"] {
        assert_eq!(
            classifier.days_until_expiry(Some(raw), base),
            Some(10),
            "{raw}"
        );
    }
    // Month-first only matches when day-first cannot.
    assert_eq!(
        classifier.days_until_expiry(Some("12/25/2026"), base),
        Some(116)
    );
}

#[test]
fn day_first_wins_the_ambiguous_case() {
    let classifier = FreshnessClassifier::default();
    // 03/04 reads as 3 April, not 4 March.
    let days = classifier
        .days_until_expiry(Some("03/04/2027"), today())
        .unwrap();
    let april_third = NaiveDate::from_ymd_opt(2027, 4, 3).unwrap();
    assert_eq!(days, (april_third - today()).num_days());
}

#[test]
fn unparseable_dates_classify_unknown() {
    let classifier = FreshnessClassifier::default();
    assert_eq!(classifier.classify(None, today()), FreshnessStatus::Unknown);
    assert_eq!(classifier.classify(Some(""), today()), FreshnessStatus::Unknown);
    assert_eq!(classifier.classify(Some("   "), today()), FreshnessStatus::Unknown);
    assert_eq!(classifier.classify(Some("soon"), today()), FreshnessStatus::Unknown);
    assert_eq!(
        classifier.classify(Some("31.08.2026"), today()),
        FreshnessStatus::Unknown
    );
}

// ── Window boundaries ────────────────────────────────────────────────────

#[test]
fn classification_boundaries_around_the_window() {
    let classifier = FreshnessClassifier::default();

    assert_eq!(
        classifier.classify(Some(&offset_str(0)), today()),
        FreshnessStatus::Expiring
    );
    assert_eq!(
        classifier.classify(Some(&offset_str(7)), today()),
        FreshnessStatus::Expiring
    );
    assert_eq!(
        classifier.classify(Some(&offset_str(8)), today()),
        FreshnessStatus::Fresh
    );
    assert_eq!(
        classifier.classify(Some(&offset_str(-1)), today()),
        FreshnessStatus::Expired
    );
}

#[test]
fn days_until_is_signed_and_status_independent() {
    let classifier = FreshnessClassifier::default();
    assert_eq!(
        classifier.days_until_expiry(Some(&offset_str(-4)), today()),
        Some(-4)
    );
    assert_eq!(
        classifier.days_until_expiry(Some(&offset_str(30)), today()),
        Some(30)
    );
    assert_eq!(classifier.days_until_expiry(None, today()), None);
}

// ── Criticality ──────────────────────────────────────────────────────────

#[test]
fn critical_covers_expired_and_the_last_day() {
    let classifier = FreshnessClassifier::default();

    assert!(classifier.is_critical(Some(&offset_str(-1)), today()));
    assert!(classifier.is_critical(Some(&offset_str(0)), today()));
    assert!(classifier.is_critical(Some(&offset_str(1)), today()));
    assert!(!classifier.is_critical(Some(&offset_str(2)), today()));
    assert!(!classifier.is_critical(None, today()));
}

#[test]
fn window_and_threshold_come_from_config() {
    let classifier = FreshnessClassifier::from_config(&ExpiryConfig {
        expiring_window_days: 3,
        critical_threshold_days: 2,
        ..ExpiryConfig::default()
    });

    assert_eq!(
        classifier.classify(Some(&offset_str(4)), today()),
        FreshnessStatus::Fresh
    );
    assert!(classifier.is_critical(Some(&offset_str(2)), today()));
    assert!(!classifier.is_critical(Some(&offset_str(3)), today()));
}
