//! Tests for the position list handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;
use std::sync::Arc;
use veronese_core::PositionItem;
use veronese_server::{AppConfig, AppState, positions};
use veronese_store::MemoryStore;

fn test_state() -> AppState {
    let config = AppConfig {
        bind: "127.0.0.1:0".to_string(),
        public_site_url: "https://example.test".to_string(),
        store: None,
    };
    AppState::with_store(config, Arc::new(MemoryStore::new()))
}

async fn body_items(response: Response) -> Vec<PositionItem> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn stored_items(state: &AppState) -> Vec<PositionItem> {
    let response = positions::handle_get(State(state.clone())).await.unwrap();
    body_items(response).await
}

#[tokio::test]
async fn test_get_defaults_to_empty() {
    let state = test_state();
    assert!(stored_items(&state).await.is_empty());
}

#[tokio::test]
async fn test_put_then_get_roundtrip() {
    let state = test_state();

    let body = json!([
        { "id": "p1", "title": "First", "image": "/img/p1.webp" },
        { "id": "p2", "title": "Second", "image": "/img/p2.webp", "tags": ["new"] },
    ]);
    let response = positions::handle_put(State(state.clone()), Json(body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = stored_items(&state).await;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, "p1");
    assert_eq!(stored[1].tags, vec!["new".to_string()]);
}

#[tokio::test]
async fn test_put_non_array_is_400_and_untouched() {
    let state = test_state();

    let seed = json!([{ "id": "p1", "title": "Kept", "image": "/img/p1.webp" }]);
    positions::handle_put(State(state.clone()), Json(seed))
        .await
        .unwrap();

    let err = positions::handle_put(State(state.clone()), Json(json!({ "not": "an array" })))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let stored = stored_items(&state).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Kept");
}

#[tokio::test]
async fn test_put_item_missing_field_is_400_and_untouched() {
    let state = test_state();

    let seed = json!([{ "id": "p1", "title": "Kept", "image": "/img/p1.webp" }]);
    positions::handle_put(State(state.clone()), Json(seed))
        .await
        .unwrap();

    // Missing `image` field entirely.
    let body = json!([
        { "id": "p2", "title": "Fine", "image": "/img/p2.webp" },
        { "id": "p3", "title": "Broken" },
    ]);
    let err = positions::handle_put(State(state.clone()), Json(body))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    // Present but empty string is rejected too.
    let body = json!([{ "id": "p4", "title": "", "image": "/img/p4.webp" }]);
    let err = positions::handle_put(State(state.clone()), Json(body))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    // Non-string id is a type error, rejected wholesale.
    let body = json!([{ "id": 7, "title": "Typed", "image": "/img/p5.webp" }]);
    let err = positions::handle_put(State(state.clone()), Json(body))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let stored = stored_items(&state).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, "p1");
}
