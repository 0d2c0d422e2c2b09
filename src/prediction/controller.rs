// ABOUTME: Prediction request controller owning one workout form and its submission state
// ABOUTME: Validates every field, issues a single prediction request and publishes transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::{PredictionService, SubmissionState};
use crate::constants::messages;
use crate::errors::{AppResult, ClientError};
use crate::models::{PredictionRequest, PredictionResult, WorkoutField, WorkoutInput};
use crate::validation::{validate, validate_all, ValidationState};

/// Controller for one form instance.
///
/// `submit` takes `&mut self`, so a second submission cannot start while one
/// is awaiting the service. Presentation layers observe transitions through
/// [`subscribe`](Self::subscribe) and grey out the trigger with
/// [`can_submit`](Self::can_submit).
pub struct PredictionController<S> {
    service: S,
    input: WorkoutInput,
    field_errors: ValidationState,
    state: watch::Sender<SubmissionState>,
    result_revealed: bool,
}

impl<S: PredictionService> PredictionController<S> {
    /// Create a controller with an empty form (gender defaults to male)
    #[must_use]
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            service,
            input: WorkoutInput::new(),
            field_errors: ValidationState::new(),
            state,
            result_revealed: false,
        }
    }

    /// Current form values
    #[must_use]
    pub const fn input(&self) -> &WorkoutInput {
        &self.input
    }

    /// Live per-field errors, recomputed on every edit
    #[must_use]
    pub const fn field_errors(&self) -> &ValidationState {
        &self.field_errors
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Apply one user edit and re-validate that field
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `field` is gender and `raw` is not one of
    /// the offered options; the previous selection is kept.
    pub fn set_field(&mut self, field: WorkoutField, raw: impl Into<String>) -> AppResult<()> {
        self.input.set_raw(field, raw)?;
        let outcome = validate(field, self.input.raw(field));
        debug!(field = %field, valid = outcome.is_none(), "Field updated");
        self.field_errors.set(field, outcome);
        Ok(())
    }

    /// Whether the submit trigger should be enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.state.borrow().is_busy() && !self.field_errors.has_errors()
    }

    /// Whether a fresh result is waiting to be shown
    #[must_use]
    pub const fn result_revealed(&self) -> bool {
        self.result_revealed
    }

    /// Hide the result view; the result itself stays until the next submit
    pub fn dismiss_result(&mut self) {
        self.result_revealed = false;
    }

    /// Run one submission and return the terminal state.
    ///
    /// Prior result and error are cleared first. Validation covers every
    /// field, not only edited ones; on failure no request is sent. Otherwise
    /// exactly one call reaches the service, without retry. Dropping the
    /// future while the request is in flight returns the form to `Idle`.
    pub async fn submit(&mut self) -> SubmissionState {
        let submission_id = Uuid::new_v4();
        self.result_revealed = false;
        self.transition(SubmissionState::Validating);

        let validation = validate_all(&self.input);
        self.field_errors = validation.clone();
        if validation.has_errors() {
            info!(
                submission.id = %submission_id,
                invalid_fields = validation.len(),
                "{}",
                messages::FIX_FORM_ERRORS
            );
            self.transition(SubmissionState::Invalid(validation));
            return self.state();
        }

        let request = match PredictionRequest::try_from(&self.input) {
            Ok(request) => request,
            Err(e) => {
                warn!(submission.id = %submission_id, error = %e, "Coercion failed after validation");
                self.transition(SubmissionState::Failed(e.message));
                return self.state();
            }
        };

        self.transition(SubmissionState::Submitting);
        let pending = PendingSubmission {
            state: &self.state,
            submission_id,
        };
        let outcome = self
            .service
            .predict(&request)
            .instrument(info_span!("predict", submission.id = %submission_id))
            .await;
        drop(pending);

        match outcome {
            Ok(calories) => {
                info!(submission.id = %submission_id, calories, "Prediction succeeded");
                let result = PredictionResult {
                    calories,
                    input: self.input.clone(),
                    completed_at: Utc::now(),
                };
                self.result_revealed = true;
                self.transition(SubmissionState::Success(result));
            }
            Err(e) => {
                let message = failure_message(&e);
                warn!(submission.id = %submission_id, error = %message, "Prediction failed");
                self.transition(SubmissionState::Failed(message));
            }
        }
        self.state()
    }

    fn transition(&self, next: SubmissionState) {
        debug!(to = next.name(), "Submission state transition");
        self.state.send_replace(next);
    }
}

/// Resets a busy form to `Idle` if the in-flight submission is abandoned
struct PendingSubmission<'a> {
    state: &'a watch::Sender<SubmissionState>,
    submission_id: Uuid,
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        let abandoned = self.state.send_if_modified(|state| {
            if state.is_busy() {
                *state = SubmissionState::Idle;
                true
            } else {
                false
            }
        });
        if abandoned {
            debug!(submission.id = %self.submission_id, "Submission abandoned");
        }
    }
}

/// User-visible text for a failed request, never empty
fn failure_message(error: &ClientError) -> String {
    let message = error.to_string();
    if !message.trim().is_empty() {
        return message;
    }
    match error {
        ClientError::Transport { .. } => messages::GENERIC_FAILURE.to_owned(),
        ClientError::Service { .. } | ClientError::MalformedResponse { .. } => {
            messages::PREDICTION_FAILED.to_owned()
        }
    }
}
