//! Scratch card content records.

use serde::{Deserialize, Serialize};

/// Content hidden behind a scratch card.
///
/// Ephemeral and client-local; reveal state is tracked separately by the
/// scratch engine's ledger, never by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScratchItem {
    /// Stable identifier, used as the reveal ledger key
    pub id: String,
    /// Display title
    pub title: String,
    /// Description revealed under the cover
    pub description: String,
    /// Optional media URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Optional media kind hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}
