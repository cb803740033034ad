//! Request extractors and validation
//!
//! This module provides custom extractors for request metadata and for the
//! body of the contact log endpoint.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::{AppError, WebError, WebResult};
use crate::models::ContactLogEvent;

/// Request context information
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_agent: Option<String>,
    pub real_ip: Option<String>,
    pub request_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            user_agent: None,
            real_ip: None,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let real_ip = parts
            .headers
            .get("x-real-ip")
            .or_else(|| parts.headers.get("x-forwarded-for"))
            .and_then(|h| h.to_str().ok())
            .map(|s| s.split(',').next().unwrap_or(s).trim().to_string());

        let request_id = parts
            .headers
            .get("x-request-id")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Self {
            user_agent,
            real_ip,
            request_id,
            timestamp: chrono::Utc::now(),
        })
    }
}

/// Body of `POST /log`, validated into a [`ContactLogEvent`]
///
/// Only the presence of keys is checked, not the type of their values. The
/// content type is not inspected; any body that parses as JSON is accepted.
#[derive(Debug, Clone)]
pub struct LogPayload(pub ContactLogEvent);

impl LogPayload {
    pub fn from_slice(body: &[u8]) -> WebResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|_| WebError::EmptyPayload)?;

        let fields = match value {
            Value::Object(map) if !map.is_empty() => map,
            other if is_blank(&other) => return Err(WebError::EmptyPayload),
            _ => return Err(WebError::invalid_request("body", "expected a JSON object")),
        };

        Ok(Self(ContactLogEvent {
            name: required(&fields, "recent_contact")?,
            owner_id: required(&fields, "owner_id")?,
            date: required(&fields, "current_date")?,
            birthday: optional(&fields, "birthday"),
        }))
    }
}

impl<S> FromRequest<S> for LogPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| WebError::invalid_request("body", e.body_text()))?;

        Ok(Self::from_slice(&body)?)
    }
}

/// Values that count as "nothing sent": null, false, zero, and empty
/// strings, arrays and objects
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// A key counts as present even when its value is null
fn required(fields: &Map<String, Value>, field: &str) -> WebResult<String> {
    fields
        .get(field)
        .map(value_text)
        .ok_or_else(|| WebError::invalid_request(field, "field is required"))
}

fn optional(fields: &Map<String, Value>, field: &str) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_text(value)),
    }
}

/// Strings are taken as-is; any other value keeps its JSON text
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
