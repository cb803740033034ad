//! Contact log HTTP handler

use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
};
use tracing::info;

use crate::errors::AppResult;
use crate::web::{
    AppState,
    extractors::{LogPayload, RequestContext},
    responses::LogResponse,
    utils::log_request,
};

/// Record that a contact was just spoken to
///
/// Responds with the same body whether the store was written or the event was
/// suppressed as a same-day repeat.
pub async fn log_contact(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    context: RequestContext,
    LogPayload(event): LogPayload,
) -> AppResult<Json<LogResponse>> {
    log_request(&method, &uri, &context);

    let outcome = state.contact_log_service.record(&event).await?;

    info!(
        request_id = %context.request_id,
        contact = %event.name,
        outcome = %outcome,
        "Contact logged"
    );

    Ok(Json(LogResponse::received(&event.name, &event.date)))
}
