//! Blog post records and lifecycle payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a blog post.
///
/// # Examples
///
/// ```
/// use veronese_core::BlogStatus;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", BlogStatus::Published), "published");
/// assert_eq!(BlogStatus::from_str("draft").unwrap(), BlogStatus::Draft);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BlogStatus {
    /// Not yet visible anywhere
    #[default]
    Draft,
    /// Live on the site
    Published,
    /// Awaiting review
    Pending,
}

/// A stored blog post.
///
/// Wire shape is camelCase to match the admin panel and public API payloads.
/// The `slug` is unique across the collection; the store wrapper enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Generated identifier (`blog_<n>`)
    pub id: String,
    /// Display title
    pub title: String,
    /// URL-safe identifier derived from the title
    pub slug: String,
    /// Body content
    pub content: String,
    /// Short teaser shown in listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Meta description used for search snippets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Author display name
    pub author: String,
    /// Single category label
    #[serde(default)]
    pub category: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publication status
    #[serde(default)]
    pub status: BlogStatus,
    /// Whether the post is pinned to featured slots
    #[serde(default)]
    pub featured: bool,
    /// Hero image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Estimated reading time in minutes, derived from word count
    pub read_time: u32,
    /// View counter, bumped on single-post reads
    #[serde(default)]
    pub views: u64,
    /// Like counter
    #[serde(default)]
    pub likes: u64,
    /// Heuristic SEO score in [0, 100]
    pub seo_score: u8,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Set the first time the post transitions into `published`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// The date used for recency ordering: publication time when present,
    /// creation time otherwise.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// Whether the post is live.
    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }
}

/// Payload for creating a post.
///
/// Fields are optional so that presence can be validated with a 400 response
/// instead of a deserialization rejection; `title`, `content`, and `author`
/// are required by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    /// Display title (required)
    pub title: Option<String>,
    /// Body content (required)
    pub content: Option<String>,
    /// Author display name (required)
    pub author: Option<String>,
    /// Explicit slug; derived from the title when absent
    pub slug: Option<String>,
    /// Short teaser
    pub excerpt: Option<String>,
    /// Meta description
    pub meta_description: Option<String>,
    /// Category label
    pub category: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publication status, defaults to draft
    pub status: Option<BlogStatus>,
    /// Featured flag
    pub featured: Option<bool>,
    /// Hero image URL
    pub featured_image: Option<String>,
}

/// Payload for updating a post in place. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostUpdate {
    /// New title; re-derives the slug
    pub title: Option<String>,
    /// New body; recomputes the read time
    pub content: Option<String>,
    /// New teaser
    pub excerpt: Option<String>,
    /// New meta description
    pub meta_description: Option<String>,
    /// New author
    pub author: Option<String>,
    /// New category
    pub category: Option<String>,
    /// Replacement tag list
    pub tags: Option<Vec<String>>,
    /// New status; first transition into `published` stamps `published_at`
    pub status: Option<BlogStatus>,
    /// New featured flag
    pub featured: Option<bool>,
    /// New hero image URL
    pub featured_image: Option<String>,
}
