//! Handler error type and response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;
use veronese_error::{ApiError, ApiErrorKind, StoreErrorKind, VeroneseError, VeroneseErrorKind};

/// JSON body for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    timestamp: String,
}

/// Error returned by request handlers.
///
/// Wraps [`ApiError`] so the workspace error types can be mapped onto HTTP
/// statuses here, next to the handlers that produce them. Messages are
/// surfaced in the body; stack traces and source locations are not.
#[derive(Debug)]
pub struct AppError(ApiError);

impl AppError {
    /// The wrapped API error.
    pub fn inner(&self) -> &ApiError {
        &self.0
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ApiErrorKind::Validation(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
            ApiErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ApiErrorKind::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<VeroneseError> for AppError {
    fn from(err: VeroneseError) -> Self {
        let kind = match err.kind() {
            VeroneseErrorKind::Api(api) => return Self(api.clone()),
            VeroneseErrorKind::Store(store) => match &store.kind {
                StoreErrorKind::Unauthorized(_) => ApiErrorKind::Unauthorized,
                StoreErrorKind::Forbidden(_) => ApiErrorKind::Forbidden,
                StoreErrorKind::NotFound(message) => ApiErrorKind::NotFound(message.clone()),
                StoreErrorKind::Conflict(message) => ApiErrorKind::Validation(message.clone()),
                StoreErrorKind::Malformed(message)
                | StoreErrorKind::Backend(message)
                | StoreErrorKind::Unavailable(message) => ApiErrorKind::Internal(message.clone()),
            },
            other => ApiErrorKind::Internal(other.to_string()),
        };
        Self(ApiError::new(kind))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Request rejected: {}", self.0);
        }

        let body = ErrorBody {
            error: self.0.kind.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };
        (status, Json(body)).into_response()
    }
}
