//! Contact form submission state machine.
//!
//! Owns the form field values and the submission status, performs exactly one
//! relay call per user-initiated submit, and surfaces success or error
//! feedback. The machine cycles for the lifetime of the page:
//!
//! ```text
//! Idle --submit--> Sending --relay ok--> Success --5s--> Idle
//!                  Sending --no credentials / relay failure--> Error
//! Error/Success --submit--> Sending
//! ```

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tracing::warn;

use crate::relay::{MessageRelay, OutgoingMessage, RelayError};

/// How long the success banner is shown before reverting to the idle form.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Submission status. Exactly one value holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Transient form state, reset to empty only after a confirmed successful
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

struct Inner {
    fields: FormFields,
    status: Status,
    error: Option<String>,
    // Incremented per submit; the success revert timer only fires if its
    // submission is still the latest one.
    submission: u64,
}

/// The contact submission controller. Cheap to clone; clones share state, so
/// a revert timer spawned from one handle is observed by all of them. A timer
/// that outlives every handle resolves as a no-op.
#[derive(Clone)]
pub struct ContactController {
    relay: Arc<dyn MessageRelay>,
    to_email: String,
    inner: Arc<Mutex<Inner>>,
}

impl ContactController {
    pub fn new(relay: Arc<dyn MessageRelay>, to_email: impl Into<String>) -> Self {
        Self {
            relay,
            to_email: to_email.into(),
            inner: Arc::new(Mutex::new(Inner {
                fields: FormFields::default(),
                status: Status::Idle,
                error: None,
                submission: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("contact state poisoned")
    }

    /// Sets the named field. No validation happens here; the relay and the
    /// browser's native constraints are the arbiters of well-formedness.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let mut inner = self.lock();
        match field {
            Field::Name => inner.fields.name = value,
            Field::Email => inner.fields.email = value,
            Field::Message => inner.fields.message = value,
        }
    }

    pub fn fields(&self) -> FormFields {
        self.lock().fields.clone()
    }

    pub fn status(&self) -> Status {
        self.lock().status
    }

    /// The user-visible error message. Only meaningful while in `Error`.
    pub fn error_message(&self) -> Option<String> {
        self.lock().error.clone()
    }

    fn config_missing_message(&self) -> String {
        format!(
            "Email service is not configured. Please contact me directly at {}",
            self.to_email
        )
    }

    fn send_failed_message(&self) -> String {
        format!(
            "Failed to send message. Please try again or contact me directly at {}",
            self.to_email
        )
    }

    /// Runs one submission attempt. A submit while a previous attempt is
    /// still `Sending` is ignored; the submit control is inert at the UI
    /// boundary and this is the matching guard at the state boundary.
    pub async fn submit(&self) {
        let (message, generation) = {
            let mut inner = self.lock();
            if inner.status == Status::Sending {
                return;
            }
            inner.status = Status::Sending;
            inner.error = None;
            inner.submission += 1;
            (
                OutgoingMessage {
                    from_name: inner.fields.name.clone(),
                    from_email: inner.fields.email.clone(),
                    message: inner.fields.message.clone(),
                    to_email: self.to_email.clone(),
                },
                inner.submission,
            )
        };

        match self.relay.send(&message).await {
            Ok(()) => {
                {
                    let mut inner = self.lock();
                    if inner.submission != generation {
                        return;
                    }
                    inner.status = Status::Success;
                    inner.fields = FormFields::default();
                }
                self.schedule_revert(generation);
            }
            Err(RelayError::NotConfigured) => {
                warn!("contact submission rejected: relay credentials missing");
                let mut inner = self.lock();
                if inner.submission != generation {
                    return;
                }
                inner.status = Status::Error;
                inner.error = Some(self.config_missing_message());
            }
            Err(err) => {
                warn!(error = %err, "contact submission failed");
                let mut inner = self.lock();
                if inner.submission != generation {
                    return;
                }
                inner.status = Status::Error;
                inner.error = Some(self.send_failed_message());
            }
        }
    }

    /// Schedules the `Success -> Idle` revert. The generation check keeps a
    /// stale timer from clobbering the state of a later submission. The task
    /// holds only a weak handle, so a controller that lives for a single
    /// request is freed as soon as its last handle drops and the timer wakes
    /// to nothing.
    fn schedule_revert(&self, generation: u64) {
        let state: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_DISPLAY).await;
            let Some(state) = state.upgrade() else {
                return;
            };
            let mut inner = state.lock().expect("contact state poisoned");
            if inner.submission == generation && inner.status == Status::Success {
                inner.status = Status::Idle;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    #[derive(Clone, Copy)]
    enum Outcome {
        Deliver,
        Fail,
        NotConfigured,
    }

    struct StubRelay {
        outcome: Outcome,
        calls: AtomicUsize,
        last: Mutex<Option<OutgoingMessage>>,
    }

    impl StubRelay {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MessageRelay for StubRelay {
        async fn send(&self, message: &OutgoingMessage) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(message.clone());
            match self.outcome {
                Outcome::Deliver => Ok(()),
                Outcome::Fail => Err(RelayError::Rejected {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                }),
                Outcome::NotConfigured => Err(RelayError::NotConfigured),
            }
        }
    }

    fn filled_controller(relay: Arc<StubRelay>) -> ContactController {
        let controller = ContactController::new(relay, "owner@example.com");
        controller.update_field(Field::Name, "Ada");
        controller.update_field(Field::Email, "ada@example.com");
        controller.update_field(Field::Message, "Hello");
        controller
    }

    #[test]
    fn update_field_is_last_write_wins_per_field() {
        let controller = ContactController::new(StubRelay::new(Outcome::Deliver), "o@example.com");
        controller.update_field(Field::Name, "A");
        controller.update_field(Field::Email, "a@example.com");
        controller.update_field(Field::Name, "Ada");

        let fields = controller.fields();
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.email, "a@example.com");
        assert_eq!(fields.message, "");
    }

    #[tokio::test]
    async fn successful_submit_clears_fields_and_reaches_success() {
        let relay = StubRelay::new(Outcome::Deliver);
        let controller = filled_controller(relay.clone());
        assert_eq!(controller.status(), Status::Idle);

        controller.submit().await;

        assert_eq!(controller.status(), Status::Success);
        assert!(controller.fields().is_empty());
        assert_eq!(relay.calls(), 1);

        let sent = relay.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.from_name, "Ada");
        assert_eq!(sent.from_email, "ada@example.com");
        assert_eq!(sent.message, "Hello");
        assert_eq!(sent.to_email, "owner@example.com");
    }

    #[tokio::test]
    async fn missing_credentials_surface_the_fallback_address() {
        let controller = filled_controller(StubRelay::new(Outcome::NotConfigured));

        controller.submit().await;

        assert_eq!(controller.status(), Status::Error);
        let message = controller.error_message().unwrap();
        assert!(message.contains("not configured"));
        assert!(message.contains("owner@example.com"));
        // Input preserved for the fallback path.
        assert_eq!(controller.fields().name, "Ada");
        assert_eq!(controller.fields().email, "ada@example.com");
        assert_eq!(controller.fields().message, "Hello");
    }

    #[tokio::test]
    async fn relay_failure_preserves_fields_for_retry() {
        let relay = StubRelay::new(Outcome::Fail);
        let controller = filled_controller(relay.clone());

        controller.submit().await;

        assert_eq!(controller.status(), Status::Error);
        assert!(controller.error_message().unwrap().contains("owner@example.com"));
        assert_eq!(controller.fields().message, "Hello");
        assert_eq!(relay.calls(), 1);
    }

    #[tokio::test]
    async fn resubmit_from_error_is_allowed() {
        let controller = filled_controller(StubRelay::new(Outcome::Fail));
        controller.submit().await;
        assert_eq!(controller.status(), Status::Error);

        controller.submit().await;
        assert_eq!(controller.status(), Status::Error);
        // The previous error message was cleared and rebuilt.
        assert!(controller.error_message().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn success_reverts_to_idle_after_exactly_five_seconds() {
        let controller = filled_controller(StubRelay::new(Outcome::Deliver));
        controller.submit().await;
        assert_eq!(controller.status(), Status::Success);

        tokio::time::sleep(SUCCESS_DISPLAY - Duration::from_millis(1)).await;
        assert_eq!(controller.status(), Status::Success);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(controller.status(), Status::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn revert_timer_does_not_keep_a_dropped_controller_alive() {
        let controller = filled_controller(StubRelay::new(Outcome::Deliver));
        controller.submit().await;
        assert_eq!(controller.status(), Status::Success);

        // The pending timer holds no strong handle on the shared state.
        let state = Arc::downgrade(&controller.inner);
        drop(controller);
        assert!(state.upgrade().is_none());

        // The timer elapses against the freed state without panicking.
        tokio::time::sleep(SUCCESS_DISPLAY + Duration::from_millis(1)).await;
        assert!(state.upgrade().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_revert_timer_does_not_clobber_a_later_submission() {
        let ok_relay = StubRelay::new(Outcome::Deliver);
        let controller = filled_controller(ok_relay);
        controller.submit().await;
        assert_eq!(controller.status(), Status::Success);

        // Two seconds into the success banner the user submits again and the
        // relay rejects it this time.
        tokio::time::sleep(Duration::from_secs(2)).await;
        let failing = ContactController {
            relay: StubRelay::new(Outcome::Fail),
            ..controller.clone()
        };
        failing.update_field(Field::Message, "second try");
        failing.submit().await;
        assert_eq!(failing.status(), Status::Error);

        // The first submission's timer elapses; the error must survive it.
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(failing.status(), Status::Error);
    }
}
