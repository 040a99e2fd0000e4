//! Submission workflow.
//!
//! The controller drives the form through
//! `Idle → Validating → (Rejected | Sending → (Sent | SendFailed)) → Idle`.
//! It owns no rendered state itself: field values and displayed errors live
//! behind the [`FormPage`] port, delivery behind the [`Transport`] port,
//! and outcome banners go through the [`Notifier`].
//!
//! Only one submission can be in flight: the submit control is disabled
//! for the whole `Sending` phase, and both terminal branches converge on
//! restoring it before the workflow returns to `Idle`.

use std::sync::Arc;

use crate::field::{Field, FieldValue};
use crate::notify::{Notifier, Severity};
use crate::page::{self, FormPage, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
use crate::state::State;
use crate::transport::{SendError, Transport};
use crate::validation::{self, FieldError, ValidationResult};

/// Aggregate banner shown when submit finds invalid fields.
pub const MSG_FORM_INVALID: &str = "Please correct the errors in the form";

/// Banner shown after a successful delivery.
pub const MSG_SENT: &str = "Thank you for your message! We will get back to you soon.";

/// Banner shown when delivery fails.
pub const MSG_SEND_FAILED: &str =
    "There was an error sending your message. Please try again later.";

/// Observable phase of the workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Sending,
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no delivery was attempted.
    Rejected(Vec<FieldError>),
    /// Delivered; the form was reset to defaults.
    Sent,
    /// Delivery failed; field values are preserved for a manual retry.
    SendFailed(SendError),
}

/// Orchestrates validation, busy state, delivery, and outcome reporting.
#[derive(Clone)]
pub struct FormController {
    page: Arc<dyn FormPage>,
    transport: Arc<dyn Transport>,
    notifier: Notifier,
    phase: State<SubmitPhase>,
}

impl FormController {
    pub fn new(
        page: Arc<dyn FormPage>,
        transport: Arc<dyn Transport>,
        notifier: Notifier,
    ) -> Self {
        Self {
            page,
            transport,
            notifier,
            phase: State::default(),
        }
    }

    /// Current workflow phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// Re-validate one field against its current value.
    ///
    /// Wired to input/change/blur events. The displayed error is updated
    /// either way, so no stale message can survive a value change that now
    /// passes.
    pub fn validate_field(&self, field: Field) -> bool {
        let value = self.page.field_value(field);
        let error = validation::validate(field, &value);
        let ok = error.is_none();
        self.page.set_field_error(field, error);
        ok
    }

    /// Clear every displayed field error (the form-reset handler).
    pub fn clear_errors(&self) {
        for field in Field::ALL {
            self.page.set_field_error(field, None);
        }
    }

    /// Reset the form to its default state: empty values, no errors.
    pub fn reset_form(&self) {
        for field in Field::ALL {
            let default = if field.is_checkbox() {
                FieldValue::Checked(false)
            } else {
                FieldValue::Text(String::new())
            };
            self.page.set_field_value(field, default);
        }
        self.clear_errors();
    }

    /// Run one submit attempt to completion.
    ///
    /// Never retries on its own; a failed attempt leaves the form editable
    /// so the user can resubmit.
    pub async fn submit(&self) -> SubmitOutcome {
        self.phase.set(SubmitPhase::Validating);
        self.clear_errors();

        let values = page::snapshot(self.page.as_ref());
        if let ValidationResult::Invalid(errors) = validation::validate_all(&values) {
            for error in &errors {
                self.page.set_field_error(error.field, Some(error.message.clone()));
            }
            self.notifier.notify(MSG_FORM_INVALID, Severity::Error);
            if let Some(first) = errors.first() {
                self.page.focus_field(first.field);
            }
            log::debug!("submit rejected: {} invalid field(s)", errors.len());
            self.phase.set(SubmitPhase::Idle);
            return SubmitOutcome::Rejected(errors);
        }

        self.phase.set(SubmitPhase::Sending);
        self.page.set_submit_disabled(true);
        self.page.set_submit_label(SUBMIT_LABEL_BUSY);
        self.page.set_busy_indicator(true);

        let outcome = match self.transport.send(&values).await {
            Ok(()) => {
                log::info!("form submission delivered");
                self.notifier.notify(MSG_SENT, Severity::Success);
                self.reset_form();
                SubmitOutcome::Sent
            }
            Err(err) => {
                log::error!("form submission failed: {err}");
                self.notifier.notify(MSG_SEND_FAILED, Severity::Error);
                SubmitOutcome::SendFailed(err)
            }
        };

        // Both branches converge here: the control is always restored.
        self.page.set_submit_disabled(false);
        self.page.set_submit_label(SUBMIT_LABEL_IDLE);
        self.page.set_busy_indicator(false);
        self.phase.set(SubmitPhase::Idle);

        outcome
    }
}
