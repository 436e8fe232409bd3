//! Lead intake

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use lead_forms::FormValues;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::{models::*, ApiState};

/// Receive a lead
///
/// Any well-formed JSON body is acknowledged, whatever its content type.
/// Nothing is stored.
#[utoipa::path(
    post,
    path = "/api/registro",
    request_body = FormValues,
    responses(
        (status = 200, description = "Lead acknowledged", body = AckResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 422, description = "Lead rejected by server-side validation", body = ValidationErrorResponse)
    ),
    tag = "registro"
)]
pub async fn receive(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<Json<AckResponse>, ApiError> {
    let lead: Value = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejected lead body");
        ApiError::Malformed(err)
    })?;

    let receipt = Uuid::new_v4();
    tracing::info!(%receipt, env = %state.environment, lead = %lead, "lead received");

    if state.validate_payload {
        lead_forms::check_payload(lead).map_err(|err| {
            tracing::warn!(%receipt, error = %err, "lead failed validation");
            ApiError::from(err)
        })?;
    }

    Ok(Json(AckResponse::ok()))
}
