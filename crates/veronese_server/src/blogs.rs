//! Blog collection handlers.

use crate::{AppError, AppState};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Deserialize;
use std::str::FromStr;
use tracing::instrument;
use veronese_core::{
    BlogPost, BlogPostUpdate, BlogQuery, BlogStatus, NewBlogPost, SeoInputs, generate_slug,
    read_time, seo_score, sort_recent,
};
use veronese_error::ApiError;

/// Query parameters accepted by the blog routes.
#[derive(Debug, Default, Deserialize)]
pub struct BlogParams {
    /// Select one post by id
    pub id: Option<String>,
    /// Select one post by slug
    pub slug: Option<String>,
    /// Filter listings by status
    pub status: Option<String>,
    /// Filter listings by category
    pub category: Option<String>,
    /// Filter listings by the featured flag
    pub featured: Option<String>,
}

/// `GET /api/blogs`: one post when `id`/`slug` is given, a filtered listing
/// otherwise.
///
/// Fetching a single post bumps its view counter as a side effect; the bump
/// is best effort and never fails the read.
#[instrument(skip(state, params), fields(id = ?params.id, slug = ?params.slug))]
pub async fn handle_get(
    State(state): State<AppState>,
    Query(params): Query<BlogParams>,
) -> Result<Response, AppError> {
    if params.id.is_some() || params.slug.is_some() {
        let mut post = match &params.id {
            Some(id) => state.blogs.get(id).await?,
            None => {
                let slug = params.slug.as_deref().unwrap_or_default();
                state.blogs.find_by_slug(slug).await?
            }
        }
        .ok_or_else(|| ApiError::not_found("post not found"))?;

        state.blogs.bump_views(&mut post).await;
        return Ok(Json(post).into_response());
    }

    let query = BlogQuery {
        status: parse_status(params.status.as_deref())?,
        category: params.category,
        featured: params.featured.as_deref().map(|f| f == "true"),
    };

    let mut posts: Vec<BlogPost> = state
        .blogs
        .list()
        .await?
        .into_iter()
        .filter(|p| query.matches(p))
        .collect();
    sort_recent(&mut posts);

    Ok(Json(posts).into_response())
}

/// `POST /api/blogs`: create a post.
#[instrument(skip(state, payload))]
pub async fn handle_post(
    State(state): State<AppState>,
    Json(payload): Json<NewBlogPost>,
) -> Result<Response, AppError> {
    let title = required(payload.title.as_deref(), "title")?;
    let content = required(payload.content.as_deref(), "content")?;
    let author = required(payload.author.as_deref(), "author")?;

    let slug = match payload.slug.as_deref() {
        Some(given) => generate_slug(given),
        None => generate_slug(title),
    };
    if slug.is_empty() {
        return Err(ApiError::validation("slug has no usable characters").into());
    }

    let status = payload.status.unwrap_or_default();
    let now = Utc::now();
    let mut post = BlogPost {
        id: state.blogs.next_id().await?,
        title: title.to_string(),
        slug,
        content: content.to_string(),
        excerpt: payload.excerpt,
        meta_description: payload.meta_description,
        author: author.to_string(),
        category: payload.category.unwrap_or_default(),
        tags: payload.tags,
        status,
        featured: payload.featured.unwrap_or(false),
        featured_image: payload.featured_image,
        read_time: read_time(content),
        views: 0,
        likes: 0,
        seo_score: 0,
        created_at: now,
        updated_at: now,
        published_at: (status == BlogStatus::Published).then_some(now),
    };
    post.seo_score = seo_score(&SeoInputs::from_post(&post));

    state.blogs.insert(&post).await?;
    Ok((StatusCode::CREATED, Json(post)).into_response())
}

/// `PUT /api/blogs?id=`: merge changed fields onto a stored post.
#[instrument(skip(state, params, payload), fields(id = ?params.id))]
pub async fn handle_put(
    State(state): State<AppState>,
    Query(params): Query<BlogParams>,
    Json(payload): Json<BlogPostUpdate>,
) -> Result<Response, AppError> {
    let id = params
        .id
        .as_deref()
        .ok_or_else(|| ApiError::validation("id is required"))?;

    let mut post = state
        .blogs
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if let Some(title) = payload.title
        && title != post.title
    {
        let slug = generate_slug(&title);
        if slug.is_empty() {
            return Err(ApiError::validation("slug has no usable characters").into());
        }
        post.title = title;
        post.slug = slug;
    }

    if let Some(content) = payload.content {
        post.read_time = read_time(&content);
        post.content = content;
    }

    if let Some(excerpt) = payload.excerpt {
        post.excerpt = Some(excerpt);
    }
    if let Some(meta_description) = payload.meta_description {
        post.meta_description = Some(meta_description);
    }
    if let Some(author) = payload.author {
        post.author = author;
    }
    if let Some(category) = payload.category {
        post.category = category;
    }
    if let Some(tags) = payload.tags {
        post.tags = tags;
    }
    if let Some(featured) = payload.featured {
        post.featured = featured;
    }
    if let Some(featured_image) = payload.featured_image {
        post.featured_image = Some(featured_image);
    }

    if let Some(status) = payload.status {
        // First transition into published stamps the publication time.
        if status == BlogStatus::Published && post.published_at.is_none() {
            post.published_at = Some(Utc::now());
        }
        post.status = status;
    }

    post.seo_score = seo_score(&SeoInputs::from_post(&post));
    post.updated_at = Utc::now();

    state.blogs.update(&post).await?;
    Ok(Json(post).into_response())
}

/// `DELETE /api/blogs?id=`: remove a post.
#[instrument(skip(state, params), fields(id = ?params.id))]
pub async fn handle_delete(
    State(state): State<AppState>,
    Query(params): Query<BlogParams>,
) -> Result<Response, AppError> {
    let id = params
        .id
        .as_deref()
        .ok_or_else(|| ApiError::validation("id is required"))?;

    if !state.blogs.remove(id).await? {
        return Err(ApiError::not_found("post not found").into());
    }

    Ok(Json(serde_json::json!({ "success": true })).into_response())
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{field} is required")).into()),
    }
}

fn parse_status(status: Option<&str>) -> Result<Option<BlogStatus>, AppError> {
    status
        .map(|s| {
            BlogStatus::from_str(s)
                .map_err(|_| ApiError::validation(format!("unknown status: {s}")).into())
        })
        .transpose()
}
