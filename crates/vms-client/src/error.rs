//! Error types for the submission workflow.

use thiserror::Error;
use vms_model::RequestField;

/// Client-side validation failures, detected before any network call.
///
/// Recovery is always the same: the workflow returns to idle and the user
/// is prompted; these never surface as network errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No target specification file is attached.
    #[error("Upload target specification file")]
    MissingFile,

    /// A required text field is empty after trimming.
    #[error("{} is required", .0.label())]
    EmptyField(RequestField),
}

/// Errors from an issued submission. All are terminal for that attempt;
/// nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// Request could not be built or delivered, or the connection failed.
    #[error("{0}")]
    Transport(String),

    /// Engine answered with a non-2xx status. `message` is the response
    /// body text if present, otherwise the status line.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Human-readable message surfaced to the user verbatim.
        message: String,
    },

    /// Engine claimed success but the body was not decodable JSON.
    #[error("invalid response from migration engine: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Why a submission could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeginError {
    /// A previous submission has not resolved yet. The trigger should be
    /// disabled while a request is in flight, so hitting this means the
    /// guard was bypassed.
    #[error("a submission is already in progress")]
    InFlight,

    /// The draft request is not submit-eligible.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::MissingFile.to_string(),
            "Upload target specification file"
        );
        assert_eq!(
            ValidationError::EmptyField(RequestField::SiteCountry).to_string(),
            "Site Country is required"
        );
    }

    #[test]
    fn server_error_displays_message_only() {
        let err = SubmitError::Server {
            status: 400,
            message: "Please provide studyId, siteId and siteCountry".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Please provide studyId, siteId and siteCountry"
        );
    }
}
