//! Tests for the position list wrapper over the in-memory backend.

use std::sync::Arc;
use veronese_core::PositionItem;
use veronese_error::{StoreErrorKind, VeroneseErrorKind};
use veronese_store::{KvStore, MemoryStore, POSITIONS_KEY, PositionList};

fn item(id: &str, title: &str) -> PositionItem {
    PositionItem {
        id: id.to_string(),
        title: title.to_string(),
        image: format!("/images/{id}.webp"),
        media_type: None,
        tags: vec![],
    }
}

#[tokio::test]
async fn test_load_missing_key_is_empty() {
    let store = Arc::new(MemoryStore::new());
    let positions = PositionList::new(store);
    assert!(positions.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_replace_and_load() {
    let store = Arc::new(MemoryStore::new());
    let positions = PositionList::new(store);

    let items = vec![item("p1", "First"), item("p2", "Second")];
    positions.replace(&items).await.unwrap();

    let loaded = positions.load().await.unwrap();
    assert_eq!(loaded, items);
}

#[tokio::test]
async fn test_replace_rejects_invalid_item_wholesale() {
    let store = Arc::new(MemoryStore::new());
    let positions = PositionList::new(store);

    positions.replace(&[item("p1", "Kept")]).await.unwrap();

    let mut bad = item("p2", "Broken");
    bad.image = String::new();
    let err = positions
        .replace(&[item("p3", "Fine"), bad])
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        VeroneseErrorKind::Store(e) if matches!(e.kind, StoreErrorKind::Conflict(_))
    ));

    // Stored list is untouched by the rejected write.
    let loaded = positions.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "p1");
}

#[tokio::test]
async fn test_malformed_stored_value_loads_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(POSITIONS_KEY, "not-a-json-array").await.unwrap();

    let positions = PositionList::new(store);
    assert!(positions.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upsert_updates_in_place_and_appends() {
    let store = Arc::new(MemoryStore::new());
    let positions = PositionList::new(store);

    positions
        .replace(&[item("p1", "First"), item("p2", "Second")])
        .await
        .unwrap();

    let mut renamed = item("p1", "First, renamed");
    renamed.tags = vec!["new".to_string()];
    positions.upsert(renamed).await.unwrap();
    positions.upsert(item("p3", "Third")).await.unwrap();

    let loaded = positions.load().await.unwrap();
    assert_eq!(loaded.len(), 3);
    // Update preserved list order.
    assert_eq!(loaded[0].title, "First, renamed");
    assert_eq!(loaded[1].id, "p2");
    assert_eq!(loaded[2].id, "p3");
}

#[tokio::test]
async fn test_remove_by_id() {
    let store = Arc::new(MemoryStore::new());
    let positions = PositionList::new(store);

    positions
        .replace(&[item("p1", "First"), item("p2", "Second")])
        .await
        .unwrap();

    assert!(positions.remove("p1").await.unwrap());
    assert!(!positions.remove("p1").await.unwrap());

    let loaded = positions.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "p2");
}

#[tokio::test]
async fn test_concurrent_replaces_leave_some_valid_list() {
    let store = Arc::new(MemoryStore::new());
    let positions = PositionList::new(store);

    let a = vec![item("a1", "A one"), item("a2", "A two")];
    let b = vec![item("b1", "B one")];

    // Whole-list overwrite means the last writer wins; which one is last is
    // not guaranteed, only that a complete list from one writer survives.
    let (ra, rb) = tokio::join!(positions.replace(&a), positions.replace(&b));
    ra.unwrap();
    rb.unwrap();

    let loaded = positions.load().await.unwrap();
    assert!(loaded == a || loaded == b, "stored list is a mix: {loaded:?}");
}
