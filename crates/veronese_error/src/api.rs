//! HTTP API error types.

/// Kinds of API errors, aligned with the response status taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ApiErrorKind {
    /// Request payload or parameters failed validation (400)
    #[display("Validation failed: {}", _0)]
    Validation(String),
    /// Requested resource does not exist (404)
    #[display("Not found: {}", _0)]
    NotFound(String),
    /// Method not supported on this route (405)
    #[display("Method not allowed")]
    MethodNotAllowed,
    /// Store credentials rejected (401)
    #[display("Unauthorized")]
    Unauthorized,
    /// Operation not permitted (403)
    #[display("Forbidden")]
    Forbidden,
    /// Unclassified failure (500)
    #[display("Internal error: {}", _0)]
    Internal(String),
}

/// API error with location tracking.
///
/// # Examples
///
/// ```
/// use veronese_error::{ApiError, ApiErrorKind};
///
/// let err = ApiError::new(ApiErrorKind::Validation("title is required".to_string()));
/// assert!(format!("{}", err).contains("title is required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", kind, line, file)]
pub struct ApiError {
    /// The kind of error that occurred
    pub kind: ApiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ApiError {
    /// Create a new API error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a validation error (400).
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation(message.into()))
    }

    /// Shorthand for a not-found error (404).
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound(message.into()))
    }

    /// Shorthand for an internal error (500).
    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Internal(message.into()))
    }
}
