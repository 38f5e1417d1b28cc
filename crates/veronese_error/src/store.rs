//! Key-value store error types.

/// Kinds of store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Credentials rejected by the backend
    #[display("Unauthorized: {}", _0)]
    Unauthorized(String),
    /// Credentials valid but operation not permitted
    #[display("Forbidden: {}", _0)]
    Forbidden(String),
    /// Key or hash field not found
    #[display("Not found: {}", _0)]
    NotFound(String),
    /// Write rejected because it violates a collection invariant
    #[display("Conflict: {}", _0)]
    Conflict(String),
    /// Stored value failed validation or deserialization
    #[display("Malformed stored value: {}", _0)]
    Malformed(String),
    /// Backend request failed
    #[display("Backend failure: {}", _0)]
    Backend(String),
    /// Store backend is unavailable
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
}

/// Store error with location tracking.
///
/// # Examples
///
/// ```
/// use veronese_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NotFound("content:blogs".to_string()));
/// assert!(format!("{}", err).contains("Not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
