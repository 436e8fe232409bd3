//! Lead Registration Form
//!
//! Domain model for the single-page lead-capture form.
//!
//! ## Features
//! - Five-field form values with digit normalization for ID and phone
//! - Per-field validation with human-readable messages
//! - Submission lifecycle as an event-driven state machine

pub mod domain;
pub mod validation;

use thiserror::Error;

pub use domain::aggregates::{FormState, Reaction, SubmissionStatus};
pub use domain::events::FormEvent;
pub use domain::value_objects::{Amount, Field, FieldErrors, FormValues};
pub use validation::{validate, Validator};

/// Title shown while a successful submission is on display.
pub const SUCCESS_TITLE: &str = "¡Formulario enviado!";
/// Detail line shown under [`SUCCESS_TITLE`].
pub const SUCCESS_DETAIL: &str = "Tus datos fueron procesados.";
/// Message shown when the intake endpoint could not be reached or refused the lead.
pub const FAILURE_MESSAGE: &str = "No pudimos enviar el formulario. Intenta de nuevo.";

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown amount: {0}")]
    UnknownAmount(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),
}

pub type Result<T> = std::result::Result<T, FormsError>;

/// Parse an arbitrary JSON payload as [`FormValues`] and run the field rules on it.
pub fn check_payload(payload: serde_json::Value) -> Result<FormValues> {
    let values: FormValues = serde_json::from_value(payload)?;
    let errors = validate(&values);
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(FormsError::Invalid(errors))
    }
}
