//! Error types for the Veronese content platform.
//!
//! This crate provides the foundation error types used throughout the Veronese
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use veronese_error::{VeroneseResult, HttpError};
//!
//! fn fetch_data() -> VeroneseResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod http;
mod json;
mod scratch;
mod store;

pub use api::{ApiError, ApiErrorKind};
pub use config::ConfigError;
pub use error::{VeroneseError, VeroneseErrorKind, VeroneseResult};
pub use http::HttpError;
pub use json::JsonError;
pub use scratch::{ScratchError, ScratchErrorKind};
pub use store::{StoreError, StoreErrorKind};
