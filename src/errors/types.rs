//! Error type definitions for the keepintouch service

use std::time::Duration;

use thiserror::Error;

use crate::utils::datetime::DateTimeError;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur while handling a
/// request. It uses `thiserror` to provide automatic error trait
/// implementations and proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Repository layer errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Contact timestamp parsing errors
    #[error("Date error: {0}")]
    DateTime(#[from] DateTimeError),

    /// Web layer errors
    #[error("Web error: {0}")]
    Web(#[from] WebError),

    /// An operation exceeded its configured time bound
    #[error("Operation timed out: {operation} after {timeout:?}")]
    Timeout {
        operation: String,
        timeout: Duration,
    },
}

/// Repository layer specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database connection failures
    #[error("Database connection failed: {message}")]
    ConnectionFailed { message: String },

    /// Query execution failures
    #[error("Query failed: {query} - {message}")]
    QueryFailed { query: String, message: String },
}

/// Web layer specific errors
///
/// The display strings are returned verbatim to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// Body missing, empty, or not JSON
    #[error("No data received")]
    EmptyPayload,

    /// Body present but a required field is missing or has the wrong type
    #[error("Data received in wrong format")]
    InvalidRequest { field: String, message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a timeout error for a named operation
    pub fn timeout<O: Into<String>>(operation: O, timeout: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout,
        }
    }
}

impl RepositoryError {
    /// Create a query failed error
    pub fn query_failed<Q: Into<String>, M: Into<String>>(query: Q, message: M) -> Self {
        Self::QueryFailed {
            query: query.into(),
            message: message.into(),
        }
    }

    /// Create a connection failed error
    pub fn connection_failed<M: Into<String>>(message: M) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
        }
    }
}

impl WebError {
    /// Create an invalid request error
    pub fn invalid_request<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_error_messages_are_client_facing() {
        assert_eq!(WebError::EmptyPayload.to_string(), "No data received");
        assert_eq!(
            WebError::invalid_request("owner_id", "field is required").to_string(),
            "Data received in wrong format"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = AppError::timeout("contact upsert", Duration::from_secs(10));
        assert_eq!(
            err.to_string(),
            "Operation timed out: contact upsert after 10s"
        );
    }

    #[test]
    fn test_repository_error_converts() {
        let err: AppError = RepositoryError::query_failed("find contact", "no such table").into();
        assert!(matches!(err, AppError::Repository(_)));
        assert_eq!(
            err.to_string(),
            "Repository error: Query failed: find contact - no such table"
        );
    }
}
