//! Submission Service
//!
//! Chooses the submission boundary from the startup configuration: the
//! in-process classifier (optionally delayed to feel like a network call) or
//! the remote scoring endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use leisure_survey_core::{AnimalResult, LocalClassifier, SurveyAnswer, SurveyResult, SurveySubmitter};
use leisure_survey_remote::RemoteSubmitter;

use crate::models::settings::SurveyConfig;
use crate::utils::error::AppResult;

/// Wraps a submitter and waits a fixed delay before delegating
pub struct SimulatedLatency<S> {
    inner: S,
    delay: Duration,
}

impl<S> SimulatedLatency<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl<S: SurveySubmitter> SurveySubmitter for SimulatedLatency<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn submit(&self, payload: &SurveyAnswer) -> SurveyResult<AnimalResult> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.submit(payload).await
    }
}

/// Build the submitter selected by the configuration
pub fn build_submitter(config: &SurveyConfig) -> AppResult<Arc<dyn SurveySubmitter>> {
    if config.use_local_classifier {
        info!(
            latency_ms = config.simulated_latency_ms,
            "Using local classifier for survey submission"
        );
        let delay = Duration::from_millis(config.simulated_latency_ms);
        return Ok(Arc::new(SimulatedLatency::new(LocalClassifier::new(), delay)));
    }

    let remote = RemoteSubmitter::new(&config.api_base_url)?;
    info!(endpoint = %remote.endpoint(), "Using remote survey submission");
    Ok(Arc::new(remote))
}
