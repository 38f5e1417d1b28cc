//! Reveal ledger with TTL-based expiry.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A recorded reveal with its expiry window.
#[derive(Debug, Clone, Getters)]
pub struct RevealEntry {
    revealed_at: Instant,
    ttl: Duration,
}

impl RevealEntry {
    /// Check if this entry is expired.
    pub fn is_expired(&self) -> bool {
        self.revealed_at.elapsed() > self.ttl
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.revealed_at.elapsed())
    }
}

/// Configuration for the reveal ledger.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder)]
#[setters(prefix = "with_")]
pub struct RevealLedgerConfig {
    /// How long a reveal is remembered (seconds)
    #[serde(default = "default_ttl")]
    ttl_seconds: u64,
}

fn default_ttl() -> u64 {
    86_400 // 24 hours
}

impl Default for RevealLedgerConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
        }
    }
}

/// Per-card reveal memory.
///
/// Tracks which card ids have been revealed, forgetting each after the
/// configured TTL so cards re-cover themselves a day later. Client-local
/// state only; nothing here ever reaches a backend.
///
/// # Example
///
/// ```
/// use veronese_scratch::{RevealLedger, RevealLedgerConfig};
///
/// let mut ledger = RevealLedger::new(RevealLedgerConfig::default());
/// assert!(!ledger.is_revealed("card-1"));
///
/// ledger.mark_revealed("card-1");
/// assert!(ledger.is_revealed("card-1"));
/// ```
pub struct RevealLedger {
    config: RevealLedgerConfig,
    entries: HashMap<String, RevealEntry>,
}

impl RevealLedger {
    /// Create a new ledger with configuration.
    pub fn new(config: RevealLedgerConfig) -> Self {
        tracing::debug!(ttl_seconds = config.ttl_seconds, "Creating new RevealLedger");
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Record a reveal for a card id, restarting its expiry window.
    pub fn mark_revealed(&mut self, id: impl Into<String>) {
        let id = id.into();
        let entry = RevealEntry {
            revealed_at: Instant::now(),
            ttl: Duration::from_secs(self.config.ttl_seconds),
        };
        tracing::debug!(id = %id, "Marked revealed");
        self.entries.insert(id, entry);
    }

    /// Whether a card id is currently revealed.
    ///
    /// An expired entry reads as not revealed and is dropped on the spot.
    pub fn is_revealed(&mut self, id: &str) -> bool {
        let Some(entry) = self.entries.get(id) else {
            return false;
        };
        if entry.is_expired() {
            tracing::debug!(id = %id, "Reveal expired, removing");
            self.entries.remove(id);
            return false;
        }
        true
    }

    /// Remove expired entries from the ledger.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::info!(removed, remaining = self.entries.len(), "Cleaned up expired reveals");
        }
        removed
    }

    /// Forget every reveal.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!(cleared = count, "Cleared ledger");
    }

    /// Number of remembered reveals, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RevealLedger {
    fn default() -> Self {
        Self::new(RevealLedgerConfig::default())
    }
}
