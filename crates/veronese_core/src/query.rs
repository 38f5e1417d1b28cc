//! Query helpers over in-memory record slices.
//!
//! These mirror the client-side filtering layer: pure functions over arrays
//! already fetched from the store, no I/O.

use crate::{BlogPost, BlogStatus};
use rand::seq::SliceRandom;

/// Filter criteria for blog listings.
///
/// All fields are optional; an empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogQuery {
    /// Match a specific status
    pub status: Option<BlogStatus>,
    /// Match a category label exactly
    pub category: Option<String>,
    /// Match the featured flag
    pub featured: Option<bool>,
}

impl BlogQuery {
    /// Whether a post satisfies every set criterion.
    pub fn matches(&self, post: &BlogPost) -> bool {
        if let Some(status) = self.status
            && post.status != status
        {
            return false;
        }
        if let Some(category) = &self.category
            && &post.category != category
        {
            return false;
        }
        if let Some(featured) = self.featured
            && post.featured != featured
        {
            return false;
        }
        true
    }
}

/// Apply a [`BlogQuery`] over a slice of posts.
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &BlogQuery) -> Vec<&'a BlogPost> {
    posts.iter().filter(|p| query.matches(p)).collect()
}

/// Case-insensitive free-text search over title, excerpt, content, and tags.
pub fn search_posts<'a>(posts: &'a [BlogPost], needle: &str) -> Vec<&'a BlogPost> {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return posts.iter().collect();
    }
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.excerpt
                    .as_deref()
                    .is_some_and(|e| e.to_lowercase().contains(&needle))
                || p.content.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort posts newest-first by `published_at ?? created_at`.
pub fn sort_recent(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
}

/// Uniform random choice from a slice. `None` when the slice is empty.
pub fn pick_random<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}
