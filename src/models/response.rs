//! Command Envelope
//!
//! Survey commands never return a bare error to the presenter. A rejected
//! action comes back as `success: false` with the message the user sees.

use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// Outcome of one survey command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T> From<Result<T, AppError>> for CommandResponse<T> {
    fn from(result: Result<T, AppError>) -> Self {
        result.map_or_else(Self::err, Self::ok)
    }
}
