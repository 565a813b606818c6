//! Application state.
//!
//! `AppState` is the root of all state: the draft request being edited,
//! the submission workflow (lifecycle phase plus the latest result), and
//! the current toast. Everything is owned here and mutated only from
//! `App::update`.

use vms_client::SubmitWorkflow;
use vms_model::MigrationRequest;

use crate::component::toast::ToastState;
use crate::settings::Settings;

/// Top-level application state.
pub struct AppState {
    /// The draft request, replaced snapshot-by-snapshot as the user edits.
    pub request: MigrationRequest,
    /// Submission lifecycle and the latest migration result.
    pub workflow: SubmitWorkflow,
    /// Application settings (engine endpoint).
    pub settings: Settings,
    /// Current transient notification, if any.
    pub toast: Option<ToastState>,
}

impl AppState {
    /// Creates initial state with loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            request: MigrationRequest::new(),
            workflow: SubmitWorkflow::new(),
            settings,
            toast: None,
        }
    }
}
