//! Form events
use crate::domain::value_objects::Field;

/// Messages that drive the form state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited a field.
    FieldChanged { field: Field, raw: String },
    /// The user pressed submit.
    SubmitRequested,
    /// The intake endpoint acknowledged the lead.
    SubmissionSucceeded,
    /// The request failed or came back non-2xx.
    SubmissionFailed { message: String },
    /// The success display window for `ticket` ran out.
    ResetElapsed { ticket: u64 },
}

impl FormEvent {
    pub fn field_changed(field: Field, raw: impl Into<String>) -> Self {
        FormEvent::FieldChanged { field, raw: raw.into() }
    }
}
