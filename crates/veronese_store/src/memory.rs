//! In-process map backend.

use crate::KvStore;
use std::collections::HashMap;
use tokio::sync::RwLock;
use veronese_error::VeroneseResult;

/// In-memory store backend.
///
/// Selected when no remote credentials are configured; also the test backend.
/// Nothing persists across restarts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    strings: RwLock<HashMap<String, String>>,
    hashes: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        tracing::info!("Using in-memory store, data will not survive a restart");
        Self::default()
    }
}

#[async_trait::async_trait]
impl KvStore for MemoryStore {
    async fn hget(&self, key: &str, field: &str) -> VeroneseResult<Option<String>> {
        let hashes = self.hashes.read().await;
        Ok(hashes.get(key).and_then(|h| h.get(field)).cloned())
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> VeroneseResult<()> {
        let mut hashes = self.hashes.write().await;
        hashes
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn hdel(&self, key: &str, field: &str) -> VeroneseResult<bool> {
        let mut hashes = self.hashes.write().await;
        Ok(hashes
            .get_mut(key)
            .is_some_and(|h| h.remove(field).is_some()))
    }

    async fn hgetall(&self, key: &str) -> VeroneseResult<Vec<(String, String)>> {
        let hashes = self.hashes.read().await;
        Ok(hashes
            .get(key)
            .map(|h| h.iter().map(|(f, v)| (f.clone(), v.clone())).collect())
            .unwrap_or_default())
    }

    async fn hlen(&self, key: &str) -> VeroneseResult<usize> {
        let hashes = self.hashes.read().await;
        Ok(hashes.get(key).map(|h| h.len()).unwrap_or(0))
    }

    async fn get(&self, key: &str) -> VeroneseResult<Option<String>> {
        let strings = self.strings.read().await;
        Ok(strings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> VeroneseResult<()> {
        let mut strings = self.strings.write().await;
        strings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn del(&self, key: &str) -> VeroneseResult<bool> {
        let mut strings = self.strings.write().await;
        Ok(strings.remove(key).is_some())
    }
}
