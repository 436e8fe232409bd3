//! Lead Registration Client
//!
//! Form controller for the lead-capture form and the HTTP client for the
//! intake endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      FORM CONTROLLER                         │
//! │                                                              │
//! │  field change ──┐                                            │
//! │  submit ────────┼──► FormState::handle ──► Reaction          │
//! │  reset timer ───┘         (pure)              │              │
//! │                                               ▼              │
//! │             ┌─────────────────┐     ┌─────────────────┐      │
//! │             │ SubmitTransport │◄────│ Send / Schedule │      │
//! │             │   (HTTP POST)   │     │      reset      │      │
//! │             └─────────────────┘     └─────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod transport;

use thiserror::Error;

pub use config::ClientConfig;
pub use controller::{FormController, FormSnapshot, SubmitOutcome};
pub use transport::{HttpTransport, ProbeInfo, SubmitTransport, TransportError};

/// Controller error types
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Bad field name or value
    #[error("form error: {0}")]
    Form(#[from] lead_forms::FormsError),
    /// Transport could not be built
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Build a controller that posts to the endpoint in `config`.
pub fn http_controller(config: ClientConfig) -> Result<FormController, ControllerError> {
    let transport = HttpTransport::new(&config)?;
    Ok(FormController::new(std::sync::Arc::new(transport), config))
}
