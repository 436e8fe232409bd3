//! Liveness probe

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{models::ProbeResponse, ApiState};

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/registro",
    responses(
        (status = 200, description = "Service is alive", body = ProbeResponse)
    ),
    tag = "registro"
)]
pub async fn probe(State(state): State<Arc<ApiState>>) -> Json<ProbeResponse> {
    Json(ProbeResponse {
        ok: true,
        env: state.environment.clone(),
        version: state.version.clone(),
    })
}
