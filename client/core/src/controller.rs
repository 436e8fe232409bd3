//! Form Controller
//!
//! Runs one [`FormState`] and carries out the reactions it asks for: posting
//! the lead through a [`SubmitTransport`] and scheduling the post-success
//! reset. All state changes go through [`FormState::handle`].

use std::sync::{Arc, Weak};

use lead_forms::{
    Amount, Field, FieldErrors, FormEvent, FormState, FormValues, Reaction, SubmissionStatus,
};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::transport::{SubmitTransport, TransportError};
use crate::ControllerError;

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The endpoint acknowledged the lead; the success display is up.
    Accepted,
    /// Validation failed; no request was made.
    Invalid(FieldErrors),
    /// A request is already outstanding, or the success display is up.
    Busy,
    /// The request failed; the form shows the failure message.
    Failed(TransportError),
}

impl SubmitOutcome {
    /// True when the endpoint acknowledged the lead.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Read-only copy of the form for a view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    /// Current field values.
    pub values: FormValues,
    /// Messages for the fields that failed the last validation.
    pub errors: FieldErrors,
    /// Where the form is in the submit cycle.
    pub status: SubmissionStatus,
}

impl FormSnapshot {
    /// Text to render above the form, if any.
    pub fn banner(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Succeeded => Some(lead_forms::SUCCESS_TITLE),
            SubmissionStatus::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Submit control label
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            SubmissionStatus::InFlight => "Enviando...",
            _ => "Enviar formulario",
        }
    }
}

/// Controller for one rendered form.
///
/// Dropping the controller tears the form down and cancels a pending reset.
pub struct FormController {
    state: Arc<Mutex<FormState>>,
    transport: Arc<dyn SubmitTransport>,
    config: ClientConfig,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl FormController {
    /// Blank form that posts through `transport`.
    pub fn new(transport: Arc<dyn SubmitTransport>, config: ClientConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new())),
            transport,
            config,
            reset_task: Mutex::new(None),
        }
    }

    /// Record a keystroke. Numeric fields keep digits only, and the field's
    /// error (if any) is cleared without re-validating.
    pub fn on_field_change(
        &self,
        field_name: &str,
        raw_value: &str,
    ) -> Result<(), ControllerError> {
        let field: Field = field_name.parse()?;
        self.change(field, raw_value);
        Ok(())
    }

    /// Typed variant of [`FormController::on_field_change`].
    pub fn change(&self, field: Field, raw_value: &str) -> bool {
        let reaction = self.dispatch(FormEvent::field_changed(field, raw_value));
        reaction == Reaction::Updated
    }

    /// Pick one of the offered amounts.
    pub fn select_amount(&self, amount: Amount) -> bool {
        self.change(Field::Monto, amount.as_str())
    }

    /// Copy of values, errors and status taken under one lock.
    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.state.lock();
        FormSnapshot {
            values: state.values().clone(),
            errors: state.errors().clone(),
            status: state.status().clone(),
        }
    }

    /// Current submit status.
    pub fn status(&self) -> SubmissionStatus {
        self.state.lock().status().clone()
    }

    /// Validate and, if the form is clean, post it.
    ///
    /// The in-flight flag is set under the state lock before the request
    /// starts, so concurrent calls produce a single request. Dropping the
    /// returned future mid-request records a failure, so the form never stays
    /// in flight.
    pub async fn submit(&self) -> SubmitOutcome {
        let values = match self.dispatch(FormEvent::SubmitRequested) {
            Reaction::Send(values) => values,
            Reaction::Rejected(errors) => {
                tracing::debug!(failing = errors.len(), "submit stopped by validation");
                return SubmitOutcome::Invalid(errors);
            }
            _ => return SubmitOutcome::Busy,
        };

        let pending = PendingSubmit::arm(&self.state);
        let result = self.transport.submit(&values).await;
        pending.disarm();

        match result {
            Ok(()) => {
                tracing::info!("lead accepted by intake endpoint");
                let reaction = self.dispatch(FormEvent::SubmissionSucceeded);
                if let Reaction::ScheduleReset { ticket } = reaction {
                    self.schedule_reset(ticket);
                }
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!(error = %err, "lead submission failed");
                self.dispatch(FormEvent::SubmissionFailed {
                    message: lead_forms::FAILURE_MESSAGE.into(),
                });
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn dispatch(&self, event: FormEvent) -> Reaction {
        self.state.lock().handle(event)
    }

    fn schedule_reset(&self, ticket: u64) {
        let state: Weak<Mutex<FormState>> = Arc::downgrade(&self.state);
        let delay = self.config.success_display();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Form already torn down.
            let Some(state) = state.upgrade() else { return };
            let reaction = state.lock().handle(FormEvent::ResetElapsed { ticket });
            tracing::debug!(?reaction, ticket, "success display elapsed");
        });
        if let Some(previous) = self.reset_task.lock().replace(handle) {
            previous.abort();
        }
    }
}

/// Outstanding request. Records a failure if dropped while still armed.
struct PendingSubmit<'a> {
    state: &'a Mutex<FormState>,
    armed: bool,
}

impl<'a> PendingSubmit<'a> {
    fn arm(state: &'a Mutex<FormState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("lead submission cancelled before an answer arrived");
        self.state.lock().handle(FormEvent::SubmissionFailed {
            message: lead_forms::FAILURE_MESSAGE.into(),
        });
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        if let Some(task) = self.reset_task.get_mut().take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Records every lead and answers with a canned result.
    #[derive(Default)]
    struct RecordingTransport {
        calls: AtomicUsize,
        sent: Mutex<Vec<FormValues>>,
        fail_with: Option<u16>,
    }

    impl RecordingTransport {
        fn failing(status: u16) -> Self {
            Self { fail_with: Some(status), ..Self::default() }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SubmitTransport for RecordingTransport {
        async fn submit(&self, values: &FormValues) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sent.lock().push(values.clone());
            tokio::task::yield_now().await;
            match self.fail_with {
                Some(status) => Err(TransportError::Status(status)),
                None => Ok(()),
            }
        }
    }

    fn controller(transport: Arc<RecordingTransport>) -> FormController {
        FormController::new(transport, ClientConfig::default())
    }

    fn fill(form: &FormController) {
        form.on_field_change("nombre", "Ana").unwrap();
        form.on_field_change("cedula", "12345678").unwrap();
        form.on_field_change("telefono", "3001234567").unwrap();
        form.on_field_change("email", "ana@x.com").unwrap();
        form.select_amount(Amount::Basic);
    }

    #[test]
    fn test_phone_input_is_normalized() {
        let form = controller(Arc::new(RecordingTransport::default()));
        form.on_field_change("telefono", "30-0123").unwrap();
        assert_eq!(form.snapshot().values.telefono, "300123");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let form = controller(Arc::new(RecordingTransport::default()));
        let err = form.on_field_change("apellido", "x").unwrap_err();
        assert!(matches!(err, ControllerError::Form(lead_forms::FormsError::UnknownField(_))));
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let transport = Arc::new(RecordingTransport::default());
        let form = controller(transport.clone());
        fill(&form);
        form.on_field_change("cedula", "").unwrap();

        let SubmitOutcome::Invalid(errors) = form.submit().await else {
            panic!("expected validation failure")
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Cedula), Some("La cédula es requerida"));
        assert_eq!(form.snapshot().errors, errors);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_resets_after_display_window() {
        let transport = Arc::new(RecordingTransport::default());
        let form = controller(transport.clone());
        fill(&form);

        assert!(form.submit().await.is_accepted());
        assert_eq!(transport.calls(), 1);
        assert_eq!(transport.sent.lock()[0].email, "ana@x.com");

        let snapshot = form.snapshot();
        assert_eq!(snapshot.status, SubmissionStatus::Succeeded);
        assert_eq!(snapshot.banner(), Some(lead_forms::SUCCESS_TITLE));

        tokio::time::sleep(Duration::from_millis(2499)).await;
        assert_eq!(form.status(), SubmissionStatus::Succeeded);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let snapshot = form.snapshot();
        assert_eq!(snapshot.status, SubmissionStatus::Idle);
        assert!(snapshot.values.is_blank());
    }

    #[tokio::test]
    async fn test_double_submit_sends_once() {
        let transport = Arc::new(RecordingTransport::default());
        let form = controller(transport.clone());
        fill(&form);

        let (first, second) = tokio::join!(form.submit(), form.submit());
        assert!(first.is_accepted());
        assert!(matches!(second, SubmitOutcome::Busy));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_enters_failed_state() {
        let transport = Arc::new(RecordingTransport::failing(503));
        let form = controller(transport.clone());
        fill(&form);

        let outcome = form.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Failed(TransportError::Status(503))));

        let snapshot = form.snapshot();
        assert_eq!(snapshot.banner(), Some(lead_forms::FAILURE_MESSAGE));
        assert_eq!(snapshot.values.nombre, "Ana");

        // Retry is allowed and goes out again.
        form.submit().await;
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_reset_is_noop() {
        let transport = Arc::new(RecordingTransport::default());
        let form = controller(transport.clone());
        fill(&form);
        assert!(form.submit().await.is_accepted());

        let state = Arc::clone(&form.state);
        drop(form);

        // Past the display window: the aborted reset never clears the form.
        tokio::time::sleep(Duration::from_secs(3)).await;
        let state = state.lock();
        assert_eq!(state.status(), &SubmissionStatus::Succeeded);
        assert_eq!(state.values().nombre, "Ana");
        assert_eq!(transport.calls(), 1);
    }

    /// Takes the lead and never answers.
    #[derive(Default)]
    struct StalledTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SubmitTransport for StalledTransport {
        async fn submit(&self, _values: &FormValues) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submit_leaves_form_retryable() {
        let transport = Arc::new(StalledTransport::default());
        let form = FormController::new(transport.clone(), ClientConfig::default());
        fill(&form);

        let timed_out = tokio::time::timeout(Duration::from_millis(20), form.submit()).await;
        assert!(timed_out.is_err());

        let snapshot = form.snapshot();
        assert!(matches!(snapshot.status, SubmissionStatus::Failed { .. }));
        assert_eq!(snapshot.banner(), Some(lead_forms::FAILURE_MESSAGE));
        assert_eq!(snapshot.values.nombre, "Ana");

        // A second attempt is not refused as busy and reaches the transport.
        let retried = tokio::time::timeout(Duration::from_millis(20), form.submit()).await;
        assert!(retried.is_err());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }
}
