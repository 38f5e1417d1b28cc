//! Pure content helpers: slug derivation, read time, and SEO scoring.

use crate::BlogPost;

/// Words-per-minute divisor for [`read_time`].
const READ_WPM: usize = 200;

/// Derive a URL-safe slug from a title.
///
/// Lowercases, drops everything outside ASCII alphanumerics, collapses runs
/// of separators to single hyphens, and trims hyphens from both ends. The
/// result contains only `[a-z0-9-]`, never starts or ends with a hyphen, and
/// the function is idempotent.
///
/// # Examples
///
/// ```
/// use veronese_core::generate_slug;
///
/// assert_eq!(generate_slug("Hello, World!"), "hello-world");
/// assert_eq!(generate_slug("  --Already--Sluggy--  "), "already-sluggy");
/// assert_eq!(generate_slug(&generate_slug("Idempotent? Yes.")), generate_slug("Idempotent? Yes."));
/// ```
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Count whitespace-separated words.
///
/// Blank input counts zero words; callers that need the one-minute display
/// floor get it from [`read_time`] instead.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Estimated reading time in minutes: `ceil(words / 200)`, floored at one
/// minute so listings never show "0 min read".
///
/// # Examples
///
/// ```
/// use veronese_core::read_time;
///
/// assert_eq!(read_time(""), 1);
/// assert_eq!(read_time("word"), 1);
/// let long = vec!["word"; 401].join(" ");
/// assert_eq!(read_time(&long), 3);
/// ```
pub fn read_time(content: &str) -> u32 {
    let words = word_count(content);
    (words.div_ceil(READ_WPM)).max(1) as u32
}

/// Attributes feeding the SEO heuristic.
#[derive(Debug, Clone, Copy)]
pub struct SeoInputs<'a> {
    /// Post title
    pub title: &'a str,
    /// Meta description, if set
    pub meta_description: Option<&'a str>,
    /// Hero image present
    pub has_featured_image: bool,
    /// Excerpt present
    pub has_excerpt: bool,
    /// At least one tag set
    pub has_tags: bool,
    /// Body length in characters
    pub content_length: usize,
}

impl<'a> SeoInputs<'a> {
    /// Collect scoring inputs from a stored post.
    pub fn from_post(post: &'a BlogPost) -> Self {
        Self {
            title: &post.title,
            meta_description: post.meta_description.as_deref(),
            has_featured_image: post.featured_image.is_some(),
            has_excerpt: post.excerpt.is_some(),
            has_tags: !post.tags.is_empty(),
            content_length: post.content.chars().count(),
        }
    }
}

/// Heuristic SEO score in `[0, 100]`, for admin-facing display only.
///
/// Base 20, plus:
/// - title length in the 50..=60 band: +15
/// - meta description length in the 150..=160 band: +15
/// - featured image: +10, excerpt: +10, tags: +10
/// - content length at least 7500 chars: +20, else at least 3000: +10
///
/// Saturates at 100 when every attribute lands.
pub fn seo_score(inputs: &SeoInputs<'_>) -> u8 {
    let mut score: u32 = 20;

    let title_len = inputs.title.chars().count();
    if (50..=60).contains(&title_len) {
        score += 15;
    }

    if let Some(meta) = inputs.meta_description {
        let meta_len = meta.chars().count();
        if (150..=160).contains(&meta_len) {
            score += 15;
        }
    }

    if inputs.has_featured_image {
        score += 10;
    }
    if inputs.has_excerpt {
        score += 10;
    }
    if inputs.has_tags {
        score += 10;
    }

    if inputs.content_length >= 7500 {
        score += 20;
    } else if inputs.content_length >= 3000 {
        score += 10;
    }

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_and_collapses() {
        assert_eq!(generate_slug("A  B___C"), "a-b-c");
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug("-leading and trailing-"), "leading-and-trailing");
    }

    #[test]
    fn read_time_rounds_up() {
        let exactly_200 = vec!["w"; 200].join(" ");
        assert_eq!(read_time(&exactly_200), 1);
        let two_hundred_one = vec!["w"; 201].join(" ");
        assert_eq!(read_time(&two_hundred_one), 2);
    }

    #[test]
    fn seo_score_saturates_at_100() {
        let title = "t".repeat(55);
        let meta = "m".repeat(155);
        let inputs = SeoInputs {
            title: &title,
            meta_description: Some(&meta),
            has_featured_image: true,
            has_excerpt: true,
            has_tags: true,
            content_length: 8000,
        };
        assert_eq!(seo_score(&inputs), 100);
    }
}
