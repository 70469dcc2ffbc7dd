//! HTTP Client Factory
//!
//! Provides a factory function for building the reqwest client used by the
//! remote submitter.

use leisure_survey_core::{SurveyError, SurveyResult};

/// User agent sent with every submission
const USER_AGENT: &str = concat!("leisure-survey/", env!("CARGO_PKG_VERSION"));

/// Build a `reqwest::Client` for survey submission.
///
/// No request timeout is configured; abandoning a slow submission is the
/// caller's job.
pub fn build_http_client() -> SurveyResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SurveyError::transport(format!("failed to build HTTP client: {}", e)))
}
