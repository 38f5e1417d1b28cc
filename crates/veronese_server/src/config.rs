//! Server configuration from environment variables.

use veronese_error::ConfigError;
use veronese_store::StoreConfig;

/// Configuration for the HTTP API server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the server binds to (e.g. "0.0.0.0:8787")
    pub bind: String,
    /// Public site origin used in generated sitemap URLs
    pub public_site_url: String,
    /// Remote store credentials; `None` selects the in-memory fallback
    pub store: Option<StoreConfig>,
}

impl AppConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `PUBLIC_SITE_URL` (default: "http://localhost:4321")
    /// - `UPSTASH_REDIS_REST_URL` (optional; selects the remote store)
    /// - `UPSTASH_REDIS_REST_TOKEN` (required when the URL is set)
    ///
    /// When no store URL is configured the server falls back to the
    /// in-process memory store, with no persistence across restarts.
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_site_url = std::env::var("PUBLIC_SITE_URL")
            .unwrap_or_else(|_| "http://localhost:4321".to_string());

        let store = match std::env::var("UPSTASH_REDIS_REST_URL") {
            Ok(base_url) => {
                let token = std::env::var("UPSTASH_REDIS_REST_TOKEN").map_err(|_| {
                    ConfigError::new(
                        "UPSTASH_REDIS_REST_TOKEN not set while UPSTASH_REDIS_REST_URL is",
                    )
                })?;
                Some(StoreConfig::new(base_url, token))
            }
            Err(_) => {
                tracing::warn!("UPSTASH_REDIS_REST_URL not set, using in-memory store");
                None
            }
        };

        Ok(Self {
            bind: "0.0.0.0:8787".to_string(),
            public_site_url,
            store,
        })
    }

    /// Set the bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }
}
