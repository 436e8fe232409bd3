//! API errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lead_forms::{FieldErrors, FormsError};
use thiserror::Error;

use crate::models::{ErrorResponse, ValidationErrorResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("body is not valid JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("payload is not a lead: {0}")]
    Shape(String),

    #[error("lead failed validation")]
    Invalid(FieldErrors),
}

impl From<FormsError> for ApiError {
    fn from(err: FormsError) -> Self {
        match err {
            FormsError::Invalid(errors) => ApiError::Invalid(errors),
            other => ApiError::Shape(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Malformed(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string()))).into_response()
            }
            ApiError::Shape(message) => {
                let body = ErrorResponse::new(message);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Invalid(errors) => {
                let body = ValidationErrorResponse::from(errors);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}
