use larder_core::models::{
    AvailabilityFilter, Cuisine, DietaryTag, DifficultyFilter, FilterState, InventoryItem,
    JobRequest, SchedulePolicy, TimeFilter,
};

// ── Inventory quantity clamp ─────────────────────────────────────────────

#[test]
fn quantity_never_goes_negative() {
    let mut item = InventoryItem::new("Flour", 2.0, "kg");
    item.adjust_quantity(-0.5);
    assert_eq!(item.quantity, 1.5);

    item.adjust_quantity(-100.0);
    assert_eq!(item.quantity, 0.0);

    item.adjust_quantity(3.0);
    assert_eq!(item.quantity, 3.0);
}

#[test]
fn negative_initial_quantity_is_clamped() {
    let item = InventoryItem::new("Flour", -2.0, "kg");
    assert_eq!(item.quantity, 0.0);
}

#[test]
fn pantry_term_is_folded() {
    let item = InventoryItem::new("  Soy Sauce ", 1.0, "ml");
    assert_eq!(item.pantry_term(), "soy sauce");
}

// ── Filter state accounting ──────────────────────────────────────────────

#[test]
fn default_state_has_no_active_filters() {
    let state = FilterState::default();
    assert!(!state.has_active_filters());
    assert_eq!(state.active_filter_count(), 0);
}

#[test]
fn each_facet_counts_as_active() {
    let state = FilterState {
        availability: AvailabilityFilter::CanMakeNow,
        cuisines: [Cuisine::Indian].into_iter().collect(),
        dietary: [DietaryTag::Vegan, DietaryTag::LowCarb].into_iter().collect(),
        time: TimeFilter::Long,
        difficulty: DifficultyFilter::Advanced,
        avoid_ingredients: ["okra".to_string()].into_iter().collect(),
        expiring_first: true,
    };
    assert!(state.has_active_filters());
    // availability + 1 cuisine + 2 dietary + time + difficulty + 1 avoided + expiring_first
    assert_eq!(state.active_filter_count(), 8);
}

#[test]
fn availability_thresholds() {
    assert_eq!(AvailabilityFilter::All.min_percentage(), None);
    assert_eq!(AvailabilityFilter::CanMakeNow.min_percentage(), Some(100.0));
    assert_eq!(AvailabilityFilter::AlmostReady.min_percentage(), Some(80.0));
    assert_eq!(AvailabilityFilter::NeedShopping.min_percentage(), Some(50.0));
}

#[test]
fn step_count_buckets_are_half_open() {
    assert!(TimeFilter::Quick.accepts(5));
    assert!(!TimeFilter::Quick.accepts(6));
    assert!(TimeFilter::Medium.accepts(10));
    assert!(!TimeFilter::Medium.accepts(11));
    assert!(TimeFilter::Long.accepts(11));

    assert!(DifficultyFilter::Beginner.accepts(5));
    assert!(DifficultyFilter::Intermediate.accepts(8));
    assert!(!DifficultyFilter::Intermediate.accepts(9));
    assert!(DifficultyFilter::Advanced.accepts(9));
}

// ── Serde names ──────────────────────────────────────────────────────────

#[test]
fn facet_enums_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&AvailabilityFilter::CanMakeNow).unwrap(),
        "\"can_make_now\""
    );
    assert_eq!(
        serde_json::to_string(&DietaryTag::GlutenFree).unwrap(),
        "\"gluten_free\""
    );
    assert_eq!(serde_json::to_string(&Cuisine::Mediterranean).unwrap(), "\"mediterranean\"");
}

// ── Job descriptors ──────────────────────────────────────────────────────

#[test]
fn job_request_constructors() {
    let periodic = JobRequest::periodic("check", std::time::Duration::from_secs(60));
    assert_eq!(periodic.policy, SchedulePolicy::KeepExisting);
    assert!(periodic.period.is_some());

    let once = JobRequest::one_shot("check_now");
    assert_eq!(once.policy, SchedulePolicy::Replace);
    assert_eq!(once.period, None);
}
