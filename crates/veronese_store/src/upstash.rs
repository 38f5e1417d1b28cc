//! Remote REST store backend.
//!
//! Speaks the Upstash-style Redis REST protocol: each command is POSTed to
//! the base URL as a JSON array of strings with bearer-token auth, and the
//! reply arrives as a `{"result": ...}` envelope.

use crate::KvStore;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::instrument;
use veronese_error::{StoreError, StoreErrorKind, VeroneseResult};

/// Configuration for the remote store connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreConfig {
    /// Base URL of the REST endpoint
    pub base_url: String,
    /// Bearer token
    pub token: String,
}

impl StoreConfig {
    /// Create a new store configuration.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

/// Command reply envelope.
#[derive(Debug, Deserialize)]
struct CommandReply {
    #[serde(default)]
    result: JsonValue,
}

/// Remote store backend over the Redis REST protocol.
#[derive(Debug, Clone)]
pub struct UpstashStore {
    config: StoreConfig,
    client: reqwest::Client,
}

impl UpstashStore {
    /// Create a new remote store client.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: StoreConfig) -> Self {
        tracing::debug!("Creating remote store client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Execute one command and return the raw `result` value.
    async fn execute(&self, command: &[&str]) -> VeroneseResult<JsonValue> {
        let response = self
            .client
            .post(&self.config.base_url)
            .bearer_auth(&self.config.token)
            .json(&command)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Store request failed: {}", e);
                StoreError::new(StoreErrorKind::Unavailable(format!("request failed: {e}")))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Store returned error: {} {}", status, body);
            let kind = match status.as_u16() {
                401 => StoreErrorKind::Unauthorized(body),
                403 => StoreErrorKind::Forbidden(body),
                _ => StoreErrorKind::Backend(format!("{status}: {body}")),
            };
            return Err(StoreError::new(kind).into());
        }

        let reply: CommandReply = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse store reply: {}", e);
            StoreError::new(StoreErrorKind::Backend(format!("parse reply: {e}")))
        })?;

        Ok(reply.result)
    }

    fn as_string(value: JsonValue) -> Option<String> {
        match value {
            JsonValue::String(s) => Some(s),
            JsonValue::Null => None,
            other => Some(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl KvStore for UpstashStore {
    #[instrument(skip(self))]
    async fn hget(&self, key: &str, field: &str) -> VeroneseResult<Option<String>> {
        let result = self.execute(&["HGET", key, field]).await?;
        Ok(Self::as_string(result))
    }

    #[instrument(skip(self, value))]
    async fn hset(&self, key: &str, field: &str, value: &str) -> VeroneseResult<()> {
        self.execute(&["HSET", key, field, value]).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn hdel(&self, key: &str, field: &str) -> VeroneseResult<bool> {
        let result = self.execute(&["HDEL", key, field]).await?;
        Ok(result.as_u64().unwrap_or(0) > 0)
    }

    #[instrument(skip(self))]
    async fn hgetall(&self, key: &str) -> VeroneseResult<Vec<(String, String)>> {
        let result = self.execute(&["HGETALL", key]).await?;

        // The reply is a flat [field, value, field, value, ...] array.
        let flat = match result {
            JsonValue::Array(items) => items,
            JsonValue::Null => return Ok(Vec::new()),
            other => {
                return Err(StoreError::new(StoreErrorKind::Backend(format!(
                    "unexpected HGETALL reply: {other}"
                )))
                .into());
            }
        };

        let mut pairs = Vec::with_capacity(flat.len() / 2);
        let mut iter = flat.into_iter();
        while let (Some(field), Some(value)) = (iter.next(), iter.next()) {
            match (Self::as_string(field), Self::as_string(value)) {
                (Some(f), Some(v)) => pairs.push((f, v)),
                _ => {
                    return Err(StoreError::new(StoreErrorKind::Backend(
                        "non-string entry in HGETALL reply".to_string(),
                    ))
                    .into());
                }
            }
        }

        Ok(pairs)
    }

    #[instrument(skip(self))]
    async fn hlen(&self, key: &str) -> VeroneseResult<usize> {
        let result = self.execute(&["HLEN", key]).await?;
        Ok(result.as_u64().unwrap_or(0) as usize)
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> VeroneseResult<Option<String>> {
        let result = self.execute(&["GET", key]).await?;
        Ok(Self::as_string(result))
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> VeroneseResult<()> {
        self.execute(&["SET", key, value]).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn del(&self, key: &str) -> VeroneseResult<bool> {
        let result = self.execute(&["DEL", key]).await?;
        Ok(result.as_u64().unwrap_or(0) > 0)
    }
}
