//! Key-value storage for the Veronese content platform.
//!
//! Both content collections live in a Redis-compatible store: the blog
//! collection as one hash key (field per post), the position list as one
//! string key holding a JSON array. This crate provides the pluggable
//! [`KvStore`] backend trait with a remote REST implementation and an
//! in-process map, plus typed collection wrappers that validate stored data
//! at the boundary instead of trusting raw JSON.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use veronese_store::{BlogCollection, MemoryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let blogs = BlogCollection::new(store);
//!
//! let posts = blogs.list().await?;
//! assert!(posts.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blogs;
mod kv;
mod memory;
mod positions;
mod upstash;

pub use blogs::{BLOGS_KEY, BlogCollection};
pub use kv::KvStore;
pub use memory::MemoryStore;
pub use positions::{POSITIONS_KEY, PositionList};
pub use upstash::{StoreConfig, UpstashStore};

pub use veronese_error::{StoreError, StoreErrorKind};
