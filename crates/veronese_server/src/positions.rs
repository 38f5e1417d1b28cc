//! Position list handlers.

use crate::{AppError, AppState};
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::Value as JsonValue;
use tracing::instrument;
use veronese_core::PositionItem;
use veronese_error::ApiError;

/// `GET /api/positions`: the stored array, empty when missing or malformed.
#[instrument(skip(state))]
pub async fn handle_get(State(state): State<AppState>) -> Result<Response, AppError> {
    let items = state.positions.load().await?;
    Ok(Json(items).into_response())
}

/// `PUT /api/positions`: wholesale replacement of the stored array.
///
/// The body must be a JSON array of records each carrying string `id`,
/// `title`, and `image`; anything else is rejected with 400 and the stored
/// list stays untouched. Last writer wins at whole-list granularity.
#[instrument(skip(state, body))]
pub async fn handle_put(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<Response, AppError> {
    if !body.is_array() {
        return Err(ApiError::validation("body must be a JSON array").into());
    }

    let items: Vec<PositionItem> = serde_json::from_value(body)
        .map_err(|e| ApiError::validation(format!("invalid position item: {e}")))?;

    if let Some(bad) = items.iter().find(|item| !item.is_valid()) {
        return Err(ApiError::validation(format!(
            "position item {:?} is missing id, title, or image",
            bad.id
        ))
        .into());
    }

    state.positions.replace(&items).await?;
    Ok(Json(items).into_response())
}
