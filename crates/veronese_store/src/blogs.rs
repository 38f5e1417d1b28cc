//! Typed wrapper over the blog collection hash key.

use crate::KvStore;
use std::sync::Arc;
use tracing::instrument;
use veronese_core::BlogPost;
use veronese_error::{JsonError, StoreError, StoreErrorKind, VeroneseResult};

/// Default hash key holding the whole blog collection, one field per post.
pub const BLOGS_KEY: &str = "content:blogs";

/// Blog collection stored as a single hash: field = post id, value = post JSON.
///
/// Stored values are deserialized into [`BlogPost`] records at this boundary.
/// A malformed field is skipped (with a warning) on enumeration and surfaces
/// as an error on point reads; it is never passed through raw. Slug
/// uniqueness is enforced here on insert and update.
#[derive(Clone)]
pub struct BlogCollection {
    store: Arc<dyn KvStore>,
    key: String,
}

impl BlogCollection {
    /// Create a collection over the default key.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_key(store, BLOGS_KEY)
    }

    /// Create a collection over an explicit key.
    pub fn with_key(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Enumerate every stored post.
    ///
    /// Malformed fields are skipped with a warning rather than failing the
    /// whole listing.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn list(&self) -> VeroneseResult<Vec<BlogPost>> {
        let pairs = self.store.hgetall(&self.key).await?;
        let mut posts = Vec::with_capacity(pairs.len());

        for (field, value) in pairs {
            match serde_json::from_str::<BlogPost>(&value) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!(field = %field, "Skipping malformed stored post: {}", e);
                }
            }
        }

        Ok(posts)
    }

    /// Fetch one post by id.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn get(&self, id: &str) -> VeroneseResult<Option<BlogPost>> {
        let Some(value) = self.store.hget(&self.key, id).await? else {
            return Ok(None);
        };

        let post = serde_json::from_str(&value).map_err(|e| {
            StoreError::new(StoreErrorKind::Malformed(format!("post {id}: {e}")))
        })?;

        Ok(Some(post))
    }

    /// Fetch one post by slug.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn find_by_slug(&self, slug: &str) -> VeroneseResult<Option<BlogPost>> {
        let posts = self.list().await?;
        Ok(posts.into_iter().find(|p| p.slug == slug))
    }

    /// Whether a slug is already taken, optionally ignoring one post id.
    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<&str>) -> VeroneseResult<bool> {
        let posts = self.list().await?;
        Ok(posts
            .iter()
            .any(|p| p.slug == slug && Some(p.id.as_str()) != exclude_id))
    }

    /// Next generated id: `blog_<n>` where n is one past the highest numeric
    /// suffix currently stored.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn next_id(&self) -> VeroneseResult<String> {
        let pairs = self.store.hgetall(&self.key).await?;
        let max = pairs
            .iter()
            .filter_map(|(field, _)| field.strip_prefix("blog_"))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Ok(format!("blog_{}", max + 1))
    }

    /// Insert a new post. Rejects slug collisions.
    #[instrument(skip(self, post), fields(key = %self.key, id = %post.id, slug = %post.slug))]
    pub async fn insert(&self, post: &BlogPost) -> VeroneseResult<()> {
        if self.slug_taken(&post.slug, None).await? {
            return Err(StoreError::new(StoreErrorKind::Conflict(format!(
                "slug already exists: {}",
                post.slug
            )))
            .into());
        }

        self.write(post).await?;
        tracing::info!(id = %post.id, slug = %post.slug, "Inserted post");
        Ok(())
    }

    /// Overwrite a stored post. Re-checks slug uniqueness excluding self.
    #[instrument(skip(self, post), fields(key = %self.key, id = %post.id, slug = %post.slug))]
    pub async fn update(&self, post: &BlogPost) -> VeroneseResult<()> {
        if self.slug_taken(&post.slug, Some(&post.id)).await? {
            return Err(StoreError::new(StoreErrorKind::Conflict(format!(
                "slug already exists: {}",
                post.slug
            )))
            .into());
        }

        self.write(post).await?;
        tracing::debug!(id = %post.id, "Updated post");
        Ok(())
    }

    /// Remove a post.
    ///
    /// # Returns
    ///
    /// `true` when the post existed and was removed.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn remove(&self, id: &str) -> VeroneseResult<bool> {
        let removed = self.store.hdel(&self.key, id).await?;
        if removed {
            tracing::info!(id = %id, "Removed post");
        }
        Ok(removed)
    }

    /// Bump the view counter and persist, best effort.
    ///
    /// The bump stays visible to the caller even when persistence fails;
    /// a failed write only logs a warning. A read never fails on the
    /// counter side effect.
    #[instrument(skip(self, post), fields(key = %self.key, id = %post.id))]
    pub async fn bump_views(&self, post: &mut BlogPost) {
        post.views += 1;
        if let Err(e) = self.write(post).await {
            tracing::warn!(id = %post.id, "Failed to persist view count: {}", e);
        }
    }

    async fn write(&self, post: &BlogPost) -> VeroneseResult<()> {
        let value = serde_json::to_string(post)
            .map_err(|e| JsonError::new(format!("serialize post {}: {e}", post.id)))?;
        self.store.hset(&self.key, &post.id, &value).await
    }
}
