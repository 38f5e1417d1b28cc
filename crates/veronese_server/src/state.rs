//! Shared request state.

use crate::AppConfig;
use std::sync::Arc;
use veronese_store::{BlogCollection, KvStore, MemoryStore, PositionList, UpstashStore};

/// State shared across request handlers.
///
/// The store backend is injected here once at startup; handlers only ever
/// see the typed collection wrappers.
#[derive(Clone)]
pub struct AppState {
    /// Blog collection over the shared store
    pub blogs: BlogCollection,
    /// Position list over the shared store
    pub positions: PositionList,
    /// Server configuration
    pub config: AppConfig,
}

impl AppState {
    /// Build state from configuration, selecting the store backend.
    pub fn new(config: AppConfig) -> Self {
        let store: Arc<dyn KvStore> = match &config.store {
            Some(store_config) => {
                tracing::info!(base_url = %store_config.base_url, "Using remote store");
                Arc::new(UpstashStore::new(store_config.clone()))
            }
            None => Arc::new(MemoryStore::new()),
        };

        Self {
            blogs: BlogCollection::new(store.clone()),
            positions: PositionList::new(store),
            config,
        }
    }

    /// Build state over an explicit backend, bypassing configuration.
    pub fn with_store(config: AppConfig, store: Arc<dyn KvStore>) -> Self {
        Self {
            blogs: BlogCollection::new(store.clone()),
            positions: PositionList::new(store),
            config,
        }
    }
}
