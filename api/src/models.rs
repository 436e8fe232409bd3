//! API Models

use lead_forms::FieldErrors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Liveness payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProbeResponse {
    pub ok: bool,
    /// Deployment environment name
    pub env: String,
    /// Release tag of the running service
    pub version: String,
}

/// Acknowledgement for a received lead
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { ok: false, error: error.into() }
    }
}

/// Per-field messages for a lead that failed server-side validation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub ok: bool,
    pub errors: BTreeMap<String, String>,
}

impl From<FieldErrors> for ValidationErrorResponse {
    fn from(errors: FieldErrors) -> Self {
        Self {
            ok: false,
            errors: errors
                .iter()
                .map(|(field, message)| (field.as_str().to_string(), message.to_string()))
                .collect(),
        }
    }
}
