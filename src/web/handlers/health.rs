//! Health check HTTP handler

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use tracing::warn;

use crate::web::{
    AppState, extractors::RequestContext, responses::HealthResponse, utils::log_request,
};

/// Health check endpoint
///
/// Reports 503 when the contact store cannot be reached.
pub async fn health_check(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&method, &uri, &context);

    let cached_contacts = state.contact_log_service.cache().len();
    let uptime_seconds = (chrono::Utc::now() - state.start_time).num_seconds();

    match state.contact_log_service.ping_store().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::healthy(cached_contacts, uptime_seconds)),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy(cached_contacts, uptime_seconds)),
            )
        }
    }
}
