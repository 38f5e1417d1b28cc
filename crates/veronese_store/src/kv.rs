//! Storage trait definition.

use veronese_error::VeroneseResult;

/// Trait for pluggable key-value store backends.
///
/// The store is used two ways: as a hash map (the blog collection, one field
/// per post) and as a plain string holder (the position list, one JSON array
/// per key). Values are always JSON strings; interpretation belongs to the
/// typed collection wrappers.
#[async_trait::async_trait]
pub trait KvStore: Send + Sync {
    /// Read one hash field.
    ///
    /// # Returns
    ///
    /// `Some(value)` when the field exists, `None` otherwise.
    async fn hget(&self, key: &str, field: &str) -> VeroneseResult<Option<String>>;

    /// Write one hash field, creating the hash if needed.
    async fn hset(&self, key: &str, field: &str, value: &str) -> VeroneseResult<()>;

    /// Delete one hash field.
    ///
    /// # Returns
    ///
    /// `true` when the field existed and was removed.
    async fn hdel(&self, key: &str, field: &str) -> VeroneseResult<bool>;

    /// Read every field/value pair of a hash. Missing key yields an empty list.
    async fn hgetall(&self, key: &str) -> VeroneseResult<Vec<(String, String)>>;

    /// Number of fields in a hash. Missing key counts zero.
    async fn hlen(&self, key: &str) -> VeroneseResult<usize>;

    /// Read a string key.
    async fn get(&self, key: &str) -> VeroneseResult<Option<String>>;

    /// Overwrite a string key.
    async fn set(&self, key: &str, value: &str) -> VeroneseResult<()>;

    /// Delete a string key.
    ///
    /// # Returns
    ///
    /// `true` when the key existed and was removed.
    async fn del(&self, key: &str) -> VeroneseResult<bool>;
}
