//! The submission state machine.
//!
//! `Idle → Validating → Submitting → Succeeded | Failed`, with both
//! terminal states re-entering the flow on the next user-initiated
//! submit. At most one request may be in flight: `begin` rejects
//! re-entrant submission, and the UI additionally disables the trigger
//! while `Submitting`.
//!
//! Non-guarantees, by contract rather than omission: an issued submission
//! cannot be cancelled and carries no client-side deadline; it runs to
//! completion or failure. Nothing is retried automatically.

use vms_model::{MigrationRequest, MigrationResult};

use crate::client::MigrationApi;
use crate::error::{BeginError, SubmitError};
use crate::notify::Notification;
use crate::validate::validate;

/// Lifecycle phase of the submission workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Transient: the request is being checked for submit-eligibility.
    Validating,
    /// The network call is outstanding.
    Submitting,
    Succeeded,
    Failed,
}

/// Owns the request lifecycle and the latest migration result.
///
/// The workflow is deliberately free of I/O: `begin` gates and enters
/// `Submitting`, the caller performs the one network call through a
/// [`MigrationApi`], and `finish` records the outcome. [`Self::submit`]
/// drives all three for callers that can hold the workflow across the
/// await.
#[derive(Debug, Default)]
pub struct SubmitWorkflow {
    phase: SubmitPhase,
    result: Option<MigrationResult>,
}

impl SubmitWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// The latest successful result, if any. Survives later failures; only
    /// a newer successful submission replaces it.
    pub fn result(&self) -> Option<&MigrationResult> {
        self.result.as_ref()
    }

    /// Whether a new submission may be started. False only while a
    /// request is in flight; the submit trigger must be disabled then.
    pub fn can_submit(&self) -> bool {
        self.phase != SubmitPhase::Submitting
    }

    /// Starts a submission: validates the draft and enters `Submitting`.
    ///
    /// On success the returned info notification must be shown BEFORE the
    /// network call is awaited — the user sees "Processing..." the moment
    /// the request leaves, not when it resolves. On validation failure the
    /// workflow returns to `Idle` and no network call may be issued.
    pub fn begin(&mut self, request: &MigrationRequest) -> Result<Notification, BeginError> {
        if self.phase == SubmitPhase::Submitting {
            tracing::warn!("submit rejected: a request is already in flight");
            return Err(BeginError::InFlight);
        }

        self.phase = SubmitPhase::Validating;
        if let Err(err) = validate(request) {
            tracing::info!(%err, "submit rejected by validation");
            self.phase = SubmitPhase::Idle;
            return Err(BeginError::Invalid(err));
        }

        tracing::info!(
            study_id = %request.study_id,
            site_id = %request.site_id,
            "submitting migration request"
        );
        self.phase = SubmitPhase::Submitting;
        Ok(Notification::info("Processing..."))
    }

    /// Records the outcome of the in-flight request.
    ///
    /// Only meaningful after a successful [`Self::begin`]. On success the
    /// decoded body replaces the current result wholesale; on failure the
    /// previous result is left untouched so the last good mapping stays
    /// visible.
    pub fn finish(&mut self, outcome: Result<MigrationResult, SubmitError>) -> Notification {
        match outcome {
            Ok(result) => {
                tracing::info!(
                    forms = result.form_map.len(),
                    log_entries = result.migration_log.len(),
                    "migration completed"
                );
                self.result = Some(result);
                self.phase = SubmitPhase::Succeeded;
                Notification::success("Completed")
            }
            Err(err) => {
                tracing::error!(%err, "migration failed");
                self.phase = SubmitPhase::Failed;
                Notification::error(format!("Error: {err}"))
            }
        }
    }

    /// Runs one full submission attempt against `api`.
    ///
    /// Exactly one suspension point exists: awaiting the network response.
    /// Notifications are delivered through `notify` in transition order.
    /// Returns the started error without calling `api` when the draft is
    /// rejected.
    pub async fn submit<A: MigrationApi>(
        &mut self,
        api: &A,
        request: &MigrationRequest,
        mut notify: impl FnMut(Notification),
    ) -> Result<(), BeginError> {
        let processing = self.begin(request)?;
        notify(processing);
        let outcome = api.submit(request).await;
        notify(self.finish(outcome));
        Ok(())
    }
}
