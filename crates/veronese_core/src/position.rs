//! Position list records.

use serde::{Deserialize, Serialize};

/// An entry in the position list.
///
/// The whole list lives under a single store key and every save replaces it
/// wholesale, so this record carries no per-item bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionItem {
    /// Stable identifier within the list
    pub id: String,
    /// Display title
    pub title: String,
    /// Image URL
    pub image: String,
    /// Optional media kind hint (e.g. "image", "video")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Optional tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PositionItem {
    /// Whether the record satisfies the list invariant: non-empty string
    /// `id`, `title`, and `image`.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.title.is_empty() && !self.image.is_empty()
    }
}
