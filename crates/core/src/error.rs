//! Core Error Types
//!
//! Defines the error taxonomy shared by the survey state machine, the
//! classifier and every submission boundary. Only thiserror + serde_json are
//! pulled in so the core crate stays lightweight.
//!
//! The application crate wraps these in its own error type together with
//! configuration and I/O failures.

use thiserror::Error;

/// Core error type for the Leisure Survey workspace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// Finish was requested before the answer set could be submitted
    #[error("Incomplete answer: {0}")]
    IncompleteAnswer(String),

    /// The submission boundary could not deliver the payload or read a result
    #[error("{message}")]
    Transport { message: String },

    /// The submission was abandoned by a user action
    #[error("Submission cancelled")]
    Cancelled,

    /// A wire value could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for core errors
pub type SurveyResult<T> = Result<T, SurveyError>;

impl SurveyError {
    /// Create an incomplete answer error
    pub fn incomplete(msg: impl Into<String>) -> Self {
        Self::IncompleteAnswer(msg.into())
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Whether this error should be shown to the user.
    ///
    /// Cancellation is silent; everything else is surfaced.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl From<serde_json::Error> for SurveyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Convert SurveyError to a string
impl From<SurveyError> for String {
    fn from(err: SurveyError) -> String {
        err.to_string()
    }
}
