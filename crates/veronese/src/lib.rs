//! Veronese - Content Platform Backend
//!
//! Veronese is the backend for a small content site: a blog collection and a
//! position list held in a Redis-compatible key-value store, pure helpers for
//! slugs, reading time, SEO scoring and client-side filtering, and a
//! scratch-to-reveal engine with per-card reveal memory.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use veronese::{AppConfig, start_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Veronese is organized as a workspace with focused crates:
//!
//! - `veronese_core` - Domain records and pure content/query helpers
//! - `veronese_error` - Error types
//! - `veronese_store` - KV backends and typed collection wrappers
//! - `veronese_scratch` - Scratch-reveal state machine and ledger
//! - `veronese_server` - HTTP API
//!
//! This crate (`veronese`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use veronese_core::{
    BlogPost, BlogPostUpdate, BlogQuery, BlogStatus, NewBlogPost, PositionItem, ScratchItem,
    SeoInputs, filter_posts, generate_slug, pick_random, read_time, search_posts, seo_score,
    sort_recent, word_count,
};
pub use veronese_error::{
    ApiError, ApiErrorKind, ConfigError, HttpError, JsonError, ScratchError, ScratchErrorKind,
    StoreError, StoreErrorKind, VeroneseError, VeroneseErrorKind, VeroneseResult,
};
pub use veronese_scratch::{
    AlphaMask, REVEAL_THRESHOLD, RevealLedger, RevealLedgerConfig, ScratchCard, ScratchState,
};
pub use veronese_server::{AppConfig, AppState, build_sitemap, router, start_server};
pub use veronese_store::{
    BlogCollection, KvStore, MemoryStore, PositionList, StoreConfig, UpstashStore,
};
