//! Form Aggregate
use serde::Serialize;

use crate::domain::events::FormEvent;
use crate::domain::value_objects::{FieldErrors, FormValues};
use crate::validation::Validator;

/// Where the form is in its submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A request is outstanding; resubmission is blocked.
    InFlight,
    /// The lead was accepted; the form comes back blank once the display window ends.
    Succeeded,
    /// The last request failed. The form stays editable and may be resubmitted.
    Failed { message: String },
}

impl SubmissionStatus {
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed { .. })
    }
}

/// What the runtime has to do after an event was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing changed.
    Ignored,
    /// State changed; nothing else to do.
    Updated,
    /// Submit refused because a request is outstanding or the success display is up.
    Busy,
    /// Submit stopped by validation. The errors are now the current field errors.
    Rejected(FieldErrors),
    /// Post these values to the intake endpoint, then report back.
    Send(FormValues),
    /// Fire [`FormEvent::ResetElapsed`] with this ticket once the display window ends.
    ScheduleReset { ticket: u64 },
    /// Display window over; the form is blank again.
    Cleared,
}

/// State owned by one rendered form.
#[derive(Clone, Debug)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    status: SubmissionStatus,
    reset_ticket: u64,
    validator: Validator,
}

impl FormState {
    pub fn new() -> Self {
        Self::with_validator(Validator::shared().clone())
    }

    pub fn with_validator(validator: Validator) -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
            reset_ticket: 0,
            validator,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Apply one event and report what the runtime should do next.
    pub fn handle(&mut self, event: FormEvent) -> Reaction {
        match event {
            FormEvent::FieldChanged { field, raw } => {
                if self.status == SubmissionStatus::Succeeded {
                    tracing::debug!(%field, "field change ignored during success display");
                    return Reaction::Ignored;
                }
                self.values.set(field, &raw);
                self.errors.clear_field(field);
                Reaction::Updated
            }
            FormEvent::SubmitRequested => {
                if !self.status.accepts_submit() {
                    return Reaction::Busy;
                }
                let errors = self.validator.validate(&self.values);
                if !errors.is_empty() {
                    self.errors = errors.clone();
                    self.status = SubmissionStatus::Idle;
                    return Reaction::Rejected(errors);
                }
                self.errors.clear();
                self.status = SubmissionStatus::InFlight;
                Reaction::Send(self.values.clone())
            }
            FormEvent::SubmissionSucceeded => {
                if self.status != SubmissionStatus::InFlight {
                    return Reaction::Ignored;
                }
                self.status = SubmissionStatus::Succeeded;
                self.reset_ticket += 1;
                Reaction::ScheduleReset { ticket: self.reset_ticket }
            }
            FormEvent::SubmissionFailed { message } => {
                if self.status != SubmissionStatus::InFlight {
                    return Reaction::Ignored;
                }
                self.status = SubmissionStatus::Failed { message };
                Reaction::Updated
            }
            FormEvent::ResetElapsed { ticket } => {
                if self.status != SubmissionStatus::Succeeded || ticket != self.reset_ticket {
                    tracing::debug!(ticket, current = self.reset_ticket, "stale reset ignored");
                    return Reaction::Ignored;
                }
                self.values.clear();
                self.errors.clear();
                self.status = SubmissionStatus::Idle;
                Reaction::Cleared
            }
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
