//! HTTP response types and utilities
//!
//! Response bodies are plain JSON objects: `{"message", "last_contact"}` on a
//! successful log and `{"error"}` on failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::errors::{AppError, WebError};

/// Body returned by `POST /log`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    pub message: String,
    pub last_contact: String,
}

impl LogResponse {
    pub fn received(name: &str, last_contact: &str) -> Self {
        Self {
            message: format!("Name \"{}\" received successfully", name),
            last_contact: last_contact.to_string(),
        }
    }
}

/// Body returned for every error status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub cached_contacts: usize,
    pub uptime_seconds: i64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthResponse {
    pub fn healthy(cached_contacts: usize, uptime_seconds: i64) -> Self {
        Self {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            cached_contacts,
            uptime_seconds,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn unhealthy(cached_contacts: usize, uptime_seconds: i64) -> Self {
        Self {
            status: "unhealthy".to_string(),
            database: "unreachable".to_string(),
            cached_contacts,
            uptime_seconds,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Map an error to its status code and client-facing message
///
/// Server-side failures get a category message; details stay in the logs.
pub fn error_status(error: &AppError) -> (StatusCode, String) {
    match error {
        AppError::Web(web_error) => (StatusCode::BAD_REQUEST, web_error.to_string()),
        AppError::DateTime(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to compare contact dates".to_string(),
        ),
        AppError::Repository(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Contact store operation failed".to_string(),
        ),
        AppError::Timeout { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Contact store did not respond in time".to_string(),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = error_status(&self);

        match &self {
            AppError::Web(WebError::InvalidRequest { field, message }) => {
                warn!(field = %field, reason = %message, "Rejected log request");
            }
            AppError::Web(WebError::EmptyPayload) => {
                warn!("Rejected log request without data");
            }
            _ => error!(error = %self, "Request failed"),
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;
    use crate::utils::datetime::DateTimeError;
    use std::time::Duration;

    #[test]
    fn test_log_response_message() {
        let response = LogResponse::received("Alice", "01/05/24, 09:00:00 AM EST");
        assert_eq!(response.message, "Name \"Alice\" received successfully");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "message": "Name \"Alice\" received successfully",
                "last_contact": "01/05/24, 09:00:00 AM EST"
            })
        );
    }

    #[test]
    fn test_client_errors_are_bad_request() {
        let (status, message) = error_status(&WebError::EmptyPayload.into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "No data received");

        let (status, message) =
            error_status(&WebError::invalid_request("owner_id", "field is required").into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Data received in wrong format");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let date_error: AppError = DateTimeError::InvalidFormat {
            input: "garbage".to_string(),
        }
        .into();
        let store_error: AppError =
            RepositoryError::connection_failed("password authentication failed").into();
        let timeout = AppError::timeout("contact upsert", Duration::from_secs(10));

        for error in [date_error, store_error, timeout] {
            let (status, message) = error_status(&error);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!message.contains("garbage"));
            assert!(!message.contains("password"));
        }
    }
}
