//! Repository contract tests, run directly against the in-memory store.

use items_api::{InMemoryItemRepository, Item, ItemInput, ItemRepository, RepositoryError};
use serde_json::json;

use crate::support::{seeded, widget};

#[test]
fn create_then_get_returns_the_same_item() {
    let repo = InMemoryItemRepository::new();

    let created = repo.create(ItemInput::new("Lamp", "Desk lamp", 24.5)).unwrap();
    let fetched = repo.get(created.id).unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Lamp");
    assert_eq!(fetched.description, "Desk lamp");
    assert_eq!(fetched.price, 24.5);
}

#[test]
fn seeded_widget_scenario() {
    let repo = seeded();

    let item = repo.create(widget()).unwrap();
    assert_eq!(
        item,
        Item {
            id: 4,
            name: "Widget".into(),
            description: "A widget".into(),
            price: 10.0,
        }
    );

    repo.delete(4).unwrap();
    assert_eq!(repo.get(4), Err(RepositoryError::NotFound));
}

#[test]
fn delete_removes_exactly_one_entry_and_keeps_order() {
    let repo = seeded();

    repo.delete(2).unwrap();

    let ids: Vec<u64> = repo.list().unwrap().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(repo.get(2), Err(RepositoryError::NotFound));
}

#[test]
fn delete_unknown_id_is_not_found() {
    let repo = seeded();
    assert_eq!(repo.delete(99999), Err(RepositoryError::NotFound));
    assert_eq!(repo.list().unwrap().len(), 3);
}

#[test]
fn get_unknown_id_is_not_found() {
    let repo = seeded();
    assert_eq!(repo.get(99999), Err(RepositoryError::NotFound));
}

#[test]
fn update_price_leaves_other_fields_alone() {
    let repo = seeded();

    let updated = repo
        .update(1, ItemInput::default().with_price(49.99))
        .unwrap();

    assert_eq!(updated.price, 49.99);
    assert_eq!(updated.name, "Sample Item 1");
    assert_eq!(updated.description, "This is a sample item");
    assert_eq!(repo.get(1).unwrap(), updated);
}

#[test]
fn update_with_no_fields_changes_nothing() {
    let repo = seeded();
    let before = repo.get(3).unwrap();

    let after = repo.update(3, ItemInput::default()).unwrap();

    assert_eq!(after, before);
}

#[test]
fn update_unknown_id_is_not_found() {
    let repo = seeded();
    let err = repo
        .update(99999, ItemInput::default().with_name("ghost"))
        .unwrap_err();
    assert_eq!(err, RepositoryError::NotFound);
}

#[test]
fn update_coerces_string_price() {
    let repo = seeded();
    let updated = repo
        .update(2, ItemInput::default().with_price("5.25"))
        .unwrap();
    assert_eq!(updated.price, 5.25);
}

#[test]
fn string_price_is_coerced_on_create() {
    let repo = InMemoryItemRepository::new();
    let item = repo
        .create(ItemInput::new("Gadget", "A gadget", "19.99"))
        .unwrap();
    assert_eq!(item.price, 19.99);
}

#[test]
fn non_numeric_price_is_stored_as_nan() {
    let repo = InMemoryItemRepository::new();
    let item = repo
        .create(ItemInput::new("Gadget", "A gadget", "not a price"))
        .unwrap();
    assert!(item.price.is_nan());
    assert!(repo.get(item.id).unwrap().price.is_nan());
}

#[test]
fn null_price_is_present_and_stored_as_nan() {
    let repo = seeded();

    let input: ItemInput =
        serde_json::from_value(json!({ "name": "n", "description": "d", "price": null })).unwrap();
    let created = repo.create(input).unwrap();
    assert_eq!(created.id, 4);
    assert!(created.price.is_nan());

    let update: ItemInput = serde_json::from_value(json!({ "price": null })).unwrap();
    let updated = repo.update(1, update).unwrap();
    assert!(updated.price.is_nan());
    assert_eq!(updated.name, "Sample Item 1");
}

#[test]
fn zero_and_negative_prices_are_accepted() {
    let repo = InMemoryItemRepository::new();
    let free = repo.create(ItemInput::new("Free", "Costs nothing", 0)).unwrap();
    let refund = repo.create(ItemInput::new("Refund", "Pays you", -5)).unwrap();
    assert_eq!(free.price, 0.0);
    assert_eq!(refund.price, -5.0);
}

#[test]
fn empty_strings_are_present() {
    let repo = InMemoryItemRepository::new();
    let item = repo.create(ItemInput::new("", "", 1)).unwrap();
    assert_eq!(item.name, "");
    assert_eq!(item.description, "");
}

#[test]
fn missing_fields_are_invalid_input() {
    let repo = seeded();

    for input in [
        ItemInput::default().with_description("d").with_price(1),
        ItemInput::default().with_name("n").with_price(1),
        ItemInput::default().with_name("n").with_description("d"),
    ] {
        let err = repo.create(input).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidInput { .. }));
    }
    assert_eq!(repo.list().unwrap().len(), 3);
}

#[test]
fn duplicate_names_get_distinct_ids() {
    let repo = seeded();

    let first = repo.create(widget()).unwrap();
    let second = repo.create(widget()).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get(first.id).unwrap(), first);
    assert_eq!(repo.get(second.id).unwrap(), second);

    let widgets = repo
        .list()
        .unwrap()
        .into_iter()
        .filter(|item| item.name == "Widget")
        .count();
    assert_eq!(widgets, 2);
}

#[test]
fn list_preserves_insertion_order() {
    let repo = InMemoryItemRepository::new();
    for name in ["c", "a", "b"] {
        repo.create(ItemInput::new(name, "letter", 1)).unwrap();
    }
    let names: Vec<String> = repo.list().unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn concurrent_creates_hand_out_unique_ids() {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    let repo = Arc::new(InMemoryItemRepository::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                (0..25)
                    .map(|i| {
                        repo.create(ItemInput::new(format!("{t}-{i}"), "threaded", i))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(ids.len(), 200);
    assert_eq!(repo.list().unwrap().len(), 200);
}
