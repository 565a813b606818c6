//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task results flow through these
//! message types into `App::update`.

use vms_client::SubmitError;
use vms_model::{MigrationResult, RequestField, TargetSpecFile};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Request editing
    // =========================================================================
    /// One of the scalar request fields was edited.
    FieldChanged(RequestField, String),

    /// The "Choose file" button was pressed.
    PickFileClicked,

    /// The file dialog resolved; `None` means the user cancelled.
    FileSelected(Option<TargetSpecFile>),

    // =========================================================================
    // Submission lifecycle
    // =========================================================================
    /// The submit button was pressed.
    SubmitPressed,

    /// The in-flight request resolved.
    SubmitFinished(Result<MigrationResult, SubmitError>),

    // =========================================================================
    // Toast notifications
    // =========================================================================
    /// Dismiss the current toast (explicit or auto-dismiss timer).
    ToastDismissed,
}
