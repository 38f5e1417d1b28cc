//! Top-level error wrapper types.

use crate::{ApiError, ConfigError, HttpError, JsonError, ScratchError, StoreError};

/// This is the foundation error enum. Each Veronese crate contributes the
/// variants it produces.
///
/// # Examples
///
/// ```
/// use veronese_error::{VeroneseError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: VeroneseError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VeroneseErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Key-value store error
    #[from(StoreError)]
    Store(StoreError),
    /// HTTP API error
    #[from(ApiError)]
    Api(ApiError),
    /// Scratch-reveal engine error
    #[from(ScratchError)]
    Scratch(ScratchError),
}

/// Veronese error with kind discrimination.
///
/// # Examples
///
/// ```
/// use veronese_error::{VeroneseResult, ConfigError};
///
/// fn might_fail() -> VeroneseResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Veronese Error: {}", _0)]
pub struct VeroneseError(Box<VeroneseErrorKind>);

impl VeroneseError {
    /// Create a new error from a kind.
    pub fn new(kind: VeroneseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VeroneseErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VeroneseErrorKind
impl<T> From<T> for VeroneseError
where
    T: Into<VeroneseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Veronese operations.
///
/// # Examples
///
/// ```
/// use veronese_error::{VeroneseResult, HttpError};
///
/// fn fetch_data() -> VeroneseResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type VeroneseResult<T> = std::result::Result<T, VeroneseError>;
