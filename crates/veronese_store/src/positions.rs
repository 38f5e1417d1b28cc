//! Typed wrapper over the position list string key.

use crate::KvStore;
use std::sync::Arc;
use tracing::instrument;
use veronese_core::PositionItem;
use veronese_error::{JsonError, StoreError, StoreErrorKind, VeroneseResult};

/// Default string key holding the whole position list as a JSON array.
pub const POSITIONS_KEY: &str = "content:positions";

/// Position list stored as one JSON array under a single key.
///
/// Every save rewrites the whole array, so the last writer wins at list
/// granularity. The per-item [`upsert`](PositionList::upsert) and
/// [`remove`](PositionList::remove) operations are layered on the same
/// serialized blob.
#[derive(Clone)]
pub struct PositionList {
    store: Arc<dyn KvStore>,
    key: String,
}

impl PositionList {
    /// Create a list over the default key.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_key(store, POSITIONS_KEY)
    }

    /// Create a list over an explicit key.
    pub fn with_key(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the stored list.
    ///
    /// A missing key or a value that fails to parse loads as the empty list;
    /// parse failures are logged, never surfaced to readers.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load(&self) -> VeroneseResult<Vec<PositionItem>> {
        let Some(value) = self.store.get(&self.key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&value) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(key = %self.key, "Stored position list is malformed, serving empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the whole list.
    ///
    /// Every item must carry non-empty `id`, `title`, and `image`; one bad
    /// item rejects the write wholesale and the stored value is untouched.
    #[instrument(skip(self, items), fields(key = %self.key, count = items.len()))]
    pub async fn replace(&self, items: &[PositionItem]) -> VeroneseResult<()> {
        if let Some(bad) = items.iter().find(|item| !item.is_valid()) {
            return Err(StoreError::new(StoreErrorKind::Conflict(format!(
                "position item {:?} is missing id, title, or image",
                bad.id
            )))
            .into());
        }

        let value = serde_json::to_string(items)
            .map_err(|e| JsonError::new(format!("serialize position list: {e}")))?;
        self.store.set(&self.key, &value).await?;

        tracing::info!(count = items.len(), "Replaced position list");
        Ok(())
    }

    /// Insert or update one item by id, preserving list order for updates.
    #[instrument(skip(self, item), fields(key = %self.key, id = %item.id))]
    pub async fn upsert(&self, item: PositionItem) -> VeroneseResult<()> {
        if !item.is_valid() {
            return Err(StoreError::new(StoreErrorKind::Conflict(format!(
                "position item {:?} is missing id, title, or image",
                item.id
            )))
            .into());
        }

        let mut items = self.load().await?;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        self.replace(&items).await
    }

    /// Remove one item by id.
    ///
    /// # Returns
    ///
    /// `true` when an item was removed.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn remove(&self, id: &str) -> VeroneseResult<bool> {
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Ok(false);
        }

        self.replace(&items).await?;
        Ok(true)
    }
}
