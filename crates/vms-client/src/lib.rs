//! Submission workflow for Vault Migration Studio.
//!
//! Owns everything between the edited draft request and the rendered
//! result: client-side validation, the submission state machine, the
//! notification channel, and the HTTP client that talks to the migration
//! engine. The engine itself is an external collaborator reachable only
//! through `POST /api/migrate`.

pub mod client;
pub mod error;
pub mod notify;
pub mod submit;
pub mod validate;

pub use client::{MigrationApi, MigrationClient};
pub use error::{BeginError, SubmitError, ValidationError};
pub use notify::{Notification, NotificationKind};
pub use submit::{SubmitPhase, SubmitWorkflow};
pub use validate::validate;
