//! Submission Boundary
//!
//! The trait every scorer implements, plus the offline implementation that
//! runs the reference classifier in-process.

use async_trait::async_trait;

use crate::answer::SurveyAnswer;
use crate::classifier::{classify, AnimalResult};
use crate::error::SurveyResult;

/// Accepts a finished survey and returns a result.
///
/// Implementations must not retry on their own; a retry is always a new call
/// with the same payload. Cancellation is handled by dropping the future.
#[async_trait]
pub trait SurveySubmitter: Send + Sync {
    /// Returns the submitter name for identification in logs.
    fn name(&self) -> &'static str;

    /// Score the payload.
    async fn submit(&self, payload: &SurveyAnswer) -> SurveyResult<AnimalResult>;
}

/// Scores payloads with the built-in classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClassifier;

impl LocalClassifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SurveySubmitter for LocalClassifier {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn submit(&self, payload: &SurveyAnswer) -> SurveyResult<AnimalResult> {
        Ok(classify(payload))
    }
}
