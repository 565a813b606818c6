//! HTTP client for the migration engine.
//!
//! The engine exposes a single endpoint: `POST /api/migrate` with a
//! multipart/form-data body carrying the four text fields and the target
//! spec file. A 2xx response is a JSON [`MigrationResult`]; a non-2xx
//! body, when present, is a human-readable error string.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::multipart;

use vms_model::{MigrationRequest, MigrationResult};

use crate::error::SubmitError;

/// User agent string for engine requests.
const USER_AGENT_VALUE: &str = concat!("vault-migration-studio/", env!("CARGO_PKG_VERSION"));

/// Seam between the submission workflow and the network.
///
/// The workflow is tested against in-memory fakes of this trait; the GUI
/// wires in [`MigrationClient`].
pub trait MigrationApi {
    /// Submits one migration request and decodes the engine's reply.
    fn submit(
        &self,
        request: &MigrationRequest,
    ) -> impl Future<Output = Result<MigrationResult, SubmitError>> + Send;
}

/// reqwest-backed client for the migration engine.
///
/// No client-side deadline is configured: a submission, once issued, runs
/// to completion or failure.
#[derive(Debug, Clone)]
pub struct MigrationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl MigrationClient {
    /// Creates a client for an engine at `endpoint`,
    /// e.g. `http://127.0.0.1:5000`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SubmitError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The configured engine endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn migrate_url(&self) -> String {
        format!("{}/api/migrate", self.endpoint.trim_end_matches('/'))
    }

    /// Builds the multipart body: `studyId`, `siteId`, `siteCountry`,
    /// `subjects` (the raw, unparsed mapping text) and `targetSpec`.
    fn build_form(request: &MigrationRequest) -> Result<multipart::Form, SubmitError> {
        let spec = request
            .target_spec
            .as_ref()
            .ok_or_else(|| SubmitError::Transport("no target spec file attached".to_string()))?;

        let file_part = multipart::Part::bytes(spec.bytes.clone())
            .file_name(spec.file_name.clone())
            .mime_str(&spec.media_type)
            .map_err(|e| {
                SubmitError::Transport(format!("invalid media type {:?}: {e}", spec.media_type))
            })?;

        Ok(multipart::Form::new()
            .text("studyId", request.study_id.clone())
            .text("siteId", request.site_id.clone())
            .text("siteCountry", request.site_country.clone())
            .text("subjects", request.subjects.clone())
            .part("targetSpec", file_part))
    }
}

impl MigrationApi for MigrationClient {
    async fn submit(&self, request: &MigrationRequest) -> Result<MigrationResult, SubmitError> {
        let url = self.migrate_url();
        let form = Self::build_form(request)?;

        tracing::debug!(%url, "posting migration request");
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body
            };
            tracing::warn!(status = status.as_u16(), "engine rejected the request");
            return Err(SubmitError::Server {
                status: status.as_u16(),
                message,
            });
        }

        // Decode failures are distinguished from transport failures, so
        // the body is read as text first.
        let body = response.text().await?;
        let result = serde_json::from_str(&body)?;
        Ok(result)
    }
}
