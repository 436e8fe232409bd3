//! Lead Registration Intake API
//!
//! Receives validated leads from the registration form and acknowledges them.
//!
//! # Endpoints
//!
//! ```text
//! GET  /api/registro           liveness probe  {ok, env, version}
//! POST /api/registro           lead intake     {ok}
//! GET  /api-docs/openapi.json  OpenAPI document
//! ```
//!
//! The service keeps no state between requests. Leads are written to the log
//! and dropped.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::*;

/// API state
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Environment name reported by the probe
    pub environment: String,
    /// Release tag reported by the probe
    pub version: String,
    /// Run the form's field rules on incoming leads
    pub validate_payload: bool,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            environment: "prod".into(),
            version: "v2".into(),
            validate_payload: false,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registro API",
        description = "Lead registration intake endpoint",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::probe,
        routes::registro::receive,
    ),
    components(
        schemas(
            lead_forms::FormValues,
            ProbeResponse, AckResponse, ErrorResponse, ValidationErrorResponse
        )
    ),
    tags(
        (name = "registro", description = "Lead intake")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
