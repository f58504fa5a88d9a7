//! The signup wizard state machine.
//!
//! One [`SignupWizard`] instance owns a single signup session: the record
//! under construction, the current step, per-field validation messages, and
//! the submission lifecycle. Validation comes from the [`Schema`] collaborator
//! and the final network side effect from a [`Submitter`] implementation.

use std::collections::BTreeMap;

use uuid::Uuid;

use super::field::Field;
use super::record::{FieldValue, SignupRecord};
use super::schema::{Schema, ValidationErrors};
use super::steps::SignupStep;

/// Fallback shown when the server rejects a submission without a message.
pub const GENERIC_FAILURE: &str = "Signup failed. Please try again.";

/// Submission lifecycle of the wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Idle,
    Submitting,
    Failed(String),
    Succeeded,
}

/// Structured failure returned by a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.message_or_fallback())]
pub struct SubmissionError {
    /// HTTP-like status, when the failure came from the server.
    pub status: Option<u16>,
    /// Message extracted from the structured response body, if any.
    pub message: Option<String>,
}

impl SubmissionError {
    pub fn new(status: Option<u16>, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// The server message, or the generic fallback when the body had none.
    pub fn message_or_fallback(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_FAILURE)
    }
}

/// External capability that carries the completed record over the network.
pub trait Submitter {
    fn submit(&self, record: &SignupRecord) -> Result<(), SubmissionError>;
}

/// Result of a submission attempt, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server acknowledged the record; navigate to the post-signup
    /// destination. Returned exactly once per session.
    Completed,
    /// Validation or the server rejected the attempt; the session stays on
    /// the final step with `Failed` displayed and may be resubmitted.
    Rejected,
    /// The call was ignored: a submission is already in flight, the session
    /// already succeeded, or the wizard is not on the final step.
    Ignored,
}

/// Controller for one signup session.
pub struct SignupWizard {
    session_id: Uuid,
    step: SignupStep,
    record: SignupRecord,
    schema: Schema,
    errors: ValidationErrors,
    show_errors: bool,
    submission: Submission,
}

impl Default for SignupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupWizard {
    /// Fresh session on the first step with the standard signup schema.
    pub fn new() -> Self {
        Self::with_schema(Schema::signup())
    }

    pub fn with_schema(schema: Schema) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            step: SignupStep::FIRST,
            record: SignupRecord::default(),
            schema,
            errors: ValidationErrors::default(),
            show_errors: false,
            submission: Submission::Idle,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    /// Read-only snapshot of the record collected so far.
    pub fn record(&self) -> &SignupRecord {
        &self.record
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Form-level message when the last submission attempt failed.
    pub fn failure_message(&self) -> Option<&str> {
        match &self.submission {
            Submission::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn is_terminal(&self) -> bool {
        self.submission == Submission::Succeeded
    }

    fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// Validation message for a field, visible only while errors are shown.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        if self.show_errors {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// All currently visible validation messages, in field order.
    pub fn visible_errors(&self) -> BTreeMap<Field, String> {
        if self.show_errors {
            self.errors
                .iter()
                .map(|(field, message)| (field, message.to_string()))
                .collect()
        } else {
            BTreeMap::new()
        }
    }

    /// Mutates one field of the record in place.
    ///
    /// If the field currently carries a validation error, only that field is
    /// re-checked so the message clears (or updates) as the user types. After
    /// a successful submission the session is terminal and edits are ignored.
    pub fn update_field(&mut self, field: Field, value: FieldValue) {
        if self.is_terminal() {
            tracing::debug!(session = %self.session_id, %field, "Edit ignored after success");
            return;
        }
        if !self.record.set(field, value) {
            return;
        }
        if self.errors.get(field).is_some() {
            match self.schema.validate_field(&self.record, field) {
                Ok(()) => self.errors.remove(field),
                Err(message) => self.errors.insert(field, message),
            }
        }
    }

    /// Validates the current step's subset and moves forward on success.
    ///
    /// On failure the step is unchanged and the failing fields' messages
    /// become visible. Repeated calls with unchanged input are idempotent.
    /// Returns whether the step validation passed.
    pub fn advance(&mut self) -> bool {
        if self.is_terminal() || self.is_submitting() {
            return false;
        }
        self.show_errors = true;
        match self
            .schema
            .validate_subset(&self.record, self.step.fields())
        {
            Ok(()) => {
                self.errors.clear();
                self.show_errors = false;
                let from = self.step;
                self.step = self.step.next();
                tracing::debug!(
                    session = %self.session_id,
                    from = from.number(),
                    to = self.step.number(),
                    "Step advanced"
                );
                true
            }
            Err(errors) => {
                tracing::debug!(
                    session = %self.session_id,
                    step = self.step.number(),
                    failing = errors.len(),
                    "Step validation failed"
                );
                self.errors = errors;
                false
            }
        }
    }

    /// Moves back one step. Never validates and never fails; shown errors are
    /// cleared so the previous step renders fresh.
    pub fn back(&mut self) {
        if self.is_terminal() {
            return;
        }
        self.step = self.step.back();
        self.show_errors = false;
        self.errors.clear();
    }

    /// First half of `submit`: validates the full record and, on success,
    /// enters `Submitting` and returns the snapshot to send. The caller hands
    /// the transport result back through [`finish_submit`](Self::finish_submit).
    ///
    /// `Err` carries the outcome to report: `Ignored` when a submission is in
    /// flight, the session already succeeded, or the wizard is not on the
    /// final step; `Rejected` when full-record validation failed (no network
    /// call is made).
    pub fn begin_submit(&mut self) -> Result<SignupRecord, SubmitOutcome> {
        if self.is_submitting() || self.is_terminal() {
            tracing::debug!(session = %self.session_id, "Submit ignored: not idle");
            return Err(SubmitOutcome::Ignored);
        }
        if !self.step.is_last() {
            tracing::warn!(
                session = %self.session_id,
                step = self.step.number(),
                "Submit ignored before the final step"
            );
            return Err(SubmitOutcome::Ignored);
        }
        self.show_errors = true;
        match self.schema.validate_all(&self.record) {
            Ok(()) => {
                self.submission = Submission::Submitting;
                tracing::info!(session = %self.session_id, "Submitting signup record");
                Ok(self.record.clone())
            }
            Err(errors) => {
                let message = errors
                    .first_message()
                    .unwrap_or(GENERIC_FAILURE)
                    .to_string();
                self.errors = errors;
                self.submission = Submission::Failed(message);
                Err(SubmitOutcome::Rejected)
            }
        }
    }

    /// Second half of `submit`: folds the transport outcome back into the
    /// state machine. Ignored unless a submission is actually in flight.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        if !self.is_submitting() {
            tracing::warn!(session = %self.session_id, "finish_submit without an in-flight submission");
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.submission = Submission::Succeeded;
                self.errors.clear();
                self.show_errors = false;
                tracing::info!(session = %self.session_id, "Signup succeeded");
                SubmitOutcome::Completed
            }
            Err(err) => {
                let message = err.message_or_fallback().to_string();
                tracing::warn!(
                    session = %self.session_id,
                    status = err.status,
                    message = %message,
                    "Signup submission failed"
                );
                self.submission = Submission::Failed(message);
                SubmitOutcome::Rejected
            }
        }
    }

    /// Validates the full record and performs the one network side effect of
    /// the session. At most one submission is ever in flight: calling this
    /// while `Submitting` (or after `Succeeded`) is a no-op.
    pub fn submit<S: Submitter + ?Sized>(&mut self, submitter: &S) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(record) => {
                let result = submitter.submit(&record);
                self.finish_submit(result)
            }
            Err(outcome) => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_hidden_until_a_transition_attempt() {
        let mut wizard = SignupWizard::new();
        assert!(wizard.field_error(Field::Name).is_none());
        assert!(!wizard.advance());
        assert_eq!(
            wizard.field_error(Field::Name),
            Some("Full Name must be at least 2 characters.")
        );
    }

    #[test]
    fn editing_a_failing_field_revalidates_only_that_field() {
        let mut wizard = SignupWizard::new();
        assert!(!wizard.advance());
        assert!(wizard.field_error(Field::Email).is_some());
        wizard.update_field(Field::Email, FieldValue::text("a@b.com"));
        assert!(wizard.field_error(Field::Email).is_none());
        // Untouched failing fields keep their messages.
        assert!(wizard.field_error(Field::Password).is_some());
    }

    #[test]
    fn editing_a_clean_field_does_not_surface_new_errors() {
        let mut wizard = SignupWizard::new();
        wizard.update_field(Field::Name, FieldValue::text("A"));
        assert!(wizard.visible_errors().is_empty());
    }

    #[test]
    fn submit_before_final_step_is_ignored() {
        let mut wizard = SignupWizard::new();
        assert_eq!(wizard.begin_submit().unwrap_err(), SubmitOutcome::Ignored);
        assert_eq!(*wizard.submission(), Submission::Idle);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut wizard = SignupWizard::new();
        assert_eq!(wizard.finish_submit(Ok(())), SubmitOutcome::Ignored);
        assert_eq!(*wizard.submission(), Submission::Idle);
    }
}
