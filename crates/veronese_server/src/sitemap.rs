//! Sitemap handler.
//!
//! A read-only aggregation: the static page list plus the slugs of every
//! published post, rendered as XML.

use crate::{AppError, AppState};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use tracing::instrument;
use veronese_core::BlogPost;

/// Paths that always appear in the sitemap.
const STATIC_PATHS: &[&str] = &["", "positions", "games", "blog", "scratch-cards"];

/// `GET /api/sitemap`: the sitemap as `application/xml`.
#[instrument(skip(state))]
pub async fn handle_get(State(state): State<AppState>) -> Result<Response, AppError> {
    let posts = state.blogs.list().await?;
    let xml = build_sitemap(&state.config.public_site_url, &posts);
    Ok(([(CONTENT_TYPE, "application/xml")], xml).into_response())
}

/// Compose the sitemap document from static paths and published posts.
pub fn build_sitemap(base_url: &str, posts: &[BlogPost]) -> String {
    let base = base_url.trim_end_matches('/');

    let mut xml = String::from(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    ));

    for path in STATIC_PATHS {
        xml.push_str("  <url>\n");
        if path.is_empty() {
            xml.push_str(&format!("    <loc>{base}/</loc>\n"));
        } else {
            xml.push_str(&format!("    <loc>{base}/{path}/</loc>\n"));
        }
        xml.push_str("  </url>\n");
    }

    for post in posts.iter().filter(|p| p.is_published()) {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{base}/blog/{}/</loc>\n", post.slug));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            post.updated_at.format("%Y-%m-%d")
        ));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
