//! Remote Submitter
//!
//! Implementation of the SurveySubmitter trait that POSTs the payload as JSON
//! to `{base}/survey` and decodes the returned result record.

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::http_client::build_http_client;
use leisure_survey_core::{AnimalResult, SurveyAnswer, SurveyError, SurveyResult, SurveySubmitter};

/// Path of the scoring endpoint relative to the API base
const SURVEY_PATH: &str = "survey";

/// Submits surveys to a remote scoring service
pub struct RemoteSubmitter {
    endpoint: Url,
    client: reqwest::Client,
}

impl RemoteSubmitter {
    /// Create a submitter for the given API base URL
    pub fn new(base_url: &str) -> SurveyResult<Self> {
        let endpoint = endpoint_url(base_url)?;
        let client = build_http_client()?;
        Ok(Self { endpoint, client })
    }

    /// Full URL payloads are posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SurveySubmitter for RemoteSubmitter {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn submit(&self, payload: &SurveyAnswer) -> SurveyResult<AnimalResult> {
        debug!(endpoint = %self.endpoint, "Posting survey payload");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| SurveyError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body_text = response.text().await.unwrap_or_default();

        if !(200..300).contains(&status) {
            warn!(status, "Survey endpoint rejected the payload");
            return Err(parse_http_error(status, &body_text));
        }

        serde_json::from_str::<AnimalResult>(&body_text).map_err(|e| {
            SurveyError::transport(format!("Failed to parse response: {}", e))
        })
    }
}

/// Resolve `{base}/survey`, tolerating trailing slashes on the base
pub fn endpoint_url(base_url: &str) -> SurveyResult<Url> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(SurveyError::transport("API base URL is empty"));
    }
    Url::parse(&format!("{}/{}", base, SURVEY_PATH))
        .map_err(|e| SurveyError::transport(format!("invalid API base URL '{}': {}", base, e)))
}

/// Map a non-success response to a transport error.
///
/// The server's body text is shown as-is when present; otherwise a generic
/// status-coded message is used.
pub fn parse_http_error(status: u16, body: &str) -> SurveyError {
    let body = body.trim();
    if body.is_empty() {
        SurveyError::transport(format!("Request failed with {}", status))
    } else {
        SurveyError::transport(body)
    }
}
