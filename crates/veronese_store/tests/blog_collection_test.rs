//! Tests for the blog collection wrapper over the in-memory backend.

use chrono::Utc;
use std::sync::Arc;
use veronese_core::{BlogPost, BlogStatus};
use veronese_error::{StoreErrorKind, VeroneseErrorKind};
use veronese_store::{BLOGS_KEY, BlogCollection, KvStore, MemoryStore};

fn post(id: &str, slug: &str) -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: id.to_string(),
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        content: "Some content".to_string(),
        excerpt: None,
        meta_description: None,
        author: "Tester".to_string(),
        category: "general".to_string(),
        tags: vec![],
        status: BlogStatus::Draft,
        featured: false,
        featured_image: None,
        read_time: 1,
        views: 0,
        likes: 0,
        seo_score: 20,
        created_at: now,
        updated_at: now,
        published_at: None,
    }
}

fn conflict_kind(err: &veronese_error::VeroneseError) -> bool {
    matches!(
        err.kind(),
        VeroneseErrorKind::Store(e) if matches!(e.kind, StoreErrorKind::Conflict(_))
    )
}

#[tokio::test]
async fn test_insert_and_get() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store);

    blogs.insert(&post("blog_1", "first-post")).await.unwrap();

    let fetched = blogs.get("blog_1").await.unwrap().unwrap();
    assert_eq!(fetched.slug, "first-post");
    assert!(blogs.get("blog_2").await.unwrap().is_none());

    let all = blogs.list().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_insert_rejects_duplicate_slug() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store);

    blogs.insert(&post("blog_1", "taken")).await.unwrap();

    let err = blogs.insert(&post("blog_2", "taken")).await.unwrap_err();
    assert!(conflict_kind(&err));

    // The losing write must not land.
    assert!(blogs.get("blog_2").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_slug_uniqueness_excludes_self() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store);

    blogs.insert(&post("blog_1", "mine")).await.unwrap();
    blogs.insert(&post("blog_2", "yours")).await.unwrap();

    // Re-saving with the same slug is fine.
    let mut mine = blogs.get("blog_1").await.unwrap().unwrap();
    mine.title = "Updated title".to_string();
    blogs.update(&mine).await.unwrap();

    // Taking another post's slug is not.
    mine.slug = "yours".to_string();
    let err = blogs.update(&mine).await.unwrap_err();
    assert!(conflict_kind(&err));
}

#[tokio::test]
async fn test_find_by_slug() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store);

    blogs.insert(&post("blog_1", "findable")).await.unwrap();

    let found = blogs.find_by_slug("findable").await.unwrap().unwrap();
    assert_eq!(found.id, "blog_1");
    assert!(blogs.find_by_slug("absent").await.unwrap().is_none());
}

#[tokio::test]
async fn test_next_id_scans_numeric_suffixes() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store.clone());

    assert_eq!(blogs.next_id().await.unwrap(), "blog_1");

    blogs.insert(&post("blog_3", "third")).await.unwrap();
    blogs.insert(&post("blog_1", "first")).await.unwrap();
    assert_eq!(blogs.next_id().await.unwrap(), "blog_4");

    // Fields outside the id scheme do not confuse the counter.
    store
        .hset(BLOGS_KEY, "legacy-entry", "{}")
        .await
        .unwrap();
    assert_eq!(blogs.next_id().await.unwrap(), "blog_4");
}

#[tokio::test]
async fn test_malformed_field_skipped_on_list_and_fails_get() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store.clone());

    blogs.insert(&post("blog_1", "good")).await.unwrap();
    store
        .hset(BLOGS_KEY, "blog_2", "{not json at all")
        .await
        .unwrap();

    let all = blogs.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "blog_1");

    let err = blogs.get("blog_2").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        VeroneseErrorKind::Store(e) if matches!(e.kind, StoreErrorKind::Malformed(_))
    ));
}

#[tokio::test]
async fn test_remove() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store);

    blogs.insert(&post("blog_1", "removable")).await.unwrap();
    assert!(blogs.remove("blog_1").await.unwrap());
    assert!(!blogs.remove("blog_1").await.unwrap());
    assert!(blogs.get("blog_1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_bump_views_persists() {
    let store = Arc::new(MemoryStore::new());
    let blogs = BlogCollection::new(store);

    blogs.insert(&post("blog_1", "viewed")).await.unwrap();

    let mut fetched = blogs.get("blog_1").await.unwrap().unwrap();
    blogs.bump_views(&mut fetched).await;
    assert_eq!(fetched.views, 1);

    let refetched = blogs.get("blog_1").await.unwrap().unwrap();
    assert_eq!(refetched.views, 1);
}
