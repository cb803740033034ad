//! Centralized error handling for the keepintouch service
//!
//! This module unifies error types across the application layers so that
//! every failure ends up as one [`AppError`] with a well-defined HTTP status.
//!
//! # Error Categories
//!
//! - **Web Errors**: missing or malformed request bodies (reported as 400)
//! - **Date Errors**: contact timestamps that fail to parse during the dedup check
//! - **Repository Errors**: contact store queries and connectivity
//! - **Timeouts**: store calls that exceed the configured bound
//!
//! # Usage
//!
//! ```rust
//! use keepintouch::errors::{AppError, AppResult, WebError};
//!
//! fn require_body(body: &[u8]) -> AppResult<()> {
//!     if body.is_empty() {
//!         return Err(WebError::EmptyPayload.into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(require_body(b""), Err(AppError::Web(_))));
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Web Results
pub type WebResult<T> = Result<T, WebError>;
