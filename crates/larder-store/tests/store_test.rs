use larder_core::models::{InventoryItem, RecipeRecord};
use larder_core::traits::{IInventoryStore, IRecipeStore, ISettingsStore};
use larder_store::StoreEngine;

fn make_recipe(name: &str, ingredients: &[&str]) -> RecipeRecord {
    RecipeRecord::new(
        name,
        ingredients.iter().map(|s| s.to_string()).collect(),
        vec!["combine".to_string(), "cook".to_string()],
    )
}

// ── Recipe corpus ────────────────────────────────────────────────────────

#[test]
fn bulk_insert_and_count() {
    let engine = StoreEngine::open_in_memory().unwrap();
    assert_eq!(engine.count().unwrap(), 0);

    let records = vec![
        make_recipe("Chicken Stir Fry", &["chicken", "soy sauce"]),
        make_recipe("Tomato Soup", &["tomato", "basil"]),
    ];
    assert_eq!(engine.insert_bulk(&records).unwrap(), 2);
    assert_eq!(engine.count().unwrap(), 2);
}

#[test]
fn reinserting_a_name_replaces_instead_of_duplicating() {
    let engine = StoreEngine::open_in_memory().unwrap();
    engine
        .insert_bulk(&[make_recipe("Tomato Soup", &["tomato"])])
        .unwrap();
    engine
        .insert_bulk(&[make_recipe("Tomato Soup", &["tomato", "basil"])])
        .unwrap();

    assert_eq!(engine.count().unwrap(), 1);
    let found = engine.search("\"basil\"", 10).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].ingredients, vec!["tomato", "basil"]);
}

#[test]
fn blank_names_are_dropped_from_batches() {
    let engine = StoreEngine::open_in_memory().unwrap();
    let records = vec![make_recipe("  ", &["tomato"]), make_recipe("Soup", &["tomato"])];
    assert_eq!(engine.insert_bulk(&records).unwrap(), 1);
    assert_eq!(engine.count().unwrap(), 1);
}

#[test]
fn search_matches_name_and_ingredient_terms() {
    let engine = StoreEngine::open_in_memory().unwrap();
    engine
        .insert_bulk(&[
            make_recipe("Chicken Stir Fry", &["chicken breast", "soy sauce"]),
            make_recipe("Basil Pesto", &["basil", "pine nuts"]),
        ])
        .unwrap();

    let by_ingredient = engine.search("\"soy\"", 10).unwrap();
    assert_eq!(by_ingredient.len(), 1);
    assert_eq!(by_ingredient[0].name, "Chicken Stir Fry");

    let by_name = engine.search("\"pesto\"", 10).unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Basil Pesto");
}

#[test]
fn search_orders_by_name_and_honors_limit() {
    let engine = StoreEngine::open_in_memory().unwrap();
    engine
        .insert_bulk(&[
            make_recipe("Zucchini Rice Bowl", &["rice", "zucchini"]),
            make_recipe("Arroz con Pollo", &["rice", "chicken"]),
            make_recipe("Mushroom Rice", &["rice", "mushroom"]),
        ])
        .unwrap();

    let all = engine.search("\"rice\"", 10).unwrap();
    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Arroz con Pollo", "Mushroom Rice", "Zucchini Rice Bowl"]);

    let capped = engine.search("\"rice\"", 2).unwrap();
    assert_eq!(capped.len(), 2);
}

#[test]
fn prefix_match_expressions_work() {
    let engine = StoreEngine::open_in_memory().unwrap();
    engine
        .insert_bulk(&[make_recipe("Chicken Curry", &["chicken thighs", "curry paste"])])
        .unwrap();

    assert_eq!(engine.search("\"chick\"*", 10).unwrap().len(), 1);
    assert!(engine.search("\"beef\"*", 10).unwrap().is_empty());
}

// ── Inventory ────────────────────────────────────────────────────────────

#[test]
fn inventory_crud_round_trip() {
    let engine = StoreEngine::open_in_memory().unwrap();

    let id = engine
        .insert(&InventoryItem::new("Milk", 1.0, "l").with_expiry("2026-09-10"))
        .unwrap();
    assert!(id > 0);

    let mut items = engine.list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Milk");
    assert_eq!(items[0].expiry.as_deref(), Some("2026-09-10"));

    let mut item = items.remove(0);
    item.adjust_quantity(-0.5);
    engine.update(&item).unwrap();
    assert_eq!(engine.list().unwrap()[0].quantity, 0.5);

    engine.delete(id).unwrap();
    assert!(engine.list().unwrap().is_empty());
}

#[test]
fn quantity_is_clamped_at_zero_on_write() {
    let engine = StoreEngine::open_in_memory().unwrap();
    let id = engine.insert(&InventoryItem::new("Eggs", 6.0, "pcs")).unwrap();

    let mut item = engine.list().unwrap().remove(0);
    assert_eq!(item.id, id);
    item.adjust_quantity(-10.0);
    engine.update(&item).unwrap();

    assert_eq!(engine.list().unwrap()[0].quantity, 0.0);
}

#[test]
fn missing_item_surfaces_not_found() {
    let engine = StoreEngine::open_in_memory().unwrap();

    let err = engine.delete(42).unwrap_err();
    assert!(matches!(
        err,
        larder_core::errors::LarderError::ItemNotFound { id: 42 }
    ));

    let ghost = InventoryItem {
        id: 42,
        ..InventoryItem::new("Ghost", 1.0, "pcs")
    };
    assert!(engine.update(&ghost).is_err());
}

// ── Settings ─────────────────────────────────────────────────────────────

#[test]
fn settings_round_trip_and_overwrite() {
    let engine = StoreEngine::open_in_memory().unwrap();

    assert_eq!(engine.get("missing").unwrap(), None);

    engine.set("availability_filter", "almost").unwrap();
    assert_eq!(engine.get("availability_filter").unwrap().as_deref(), Some("almost"));

    engine.set("availability_filter", "all").unwrap();
    assert_eq!(engine.get("availability_filter").unwrap().as_deref(), Some("all"));
}

#[test]
fn bool_settings_default_false() {
    let engine = StoreEngine::open_in_memory().unwrap();
    assert!(!engine.get_bool("recipes_imported").unwrap());

    engine.set_bool("recipes_imported", true).unwrap();
    assert!(engine.get_bool("recipes_imported").unwrap());

    engine.set_bool("recipes_imported", false).unwrap();
    assert!(!engine.get_bool("recipes_imported").unwrap());
}
