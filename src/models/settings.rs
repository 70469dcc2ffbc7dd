//! Settings Models
//!
//! Process-level configuration, chosen once at start.

use serde::{Deserialize, Serialize};

/// Default scoring endpoint base
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Default delay the local classifier adds to mimic a network round trip
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 600;

/// Survey configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyConfig {
    /// Score in-process with the reference classifier instead of calling the
    /// remote endpoint
    #[serde(default = "default_use_local_classifier")]
    pub use_local_classifier: bool,
    /// Base URL of the scoring API; payloads go to `{apiBaseUrl}/survey`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Artificial delay for the local classifier, in milliseconds
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

fn default_use_local_classifier() -> bool {
    true
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_simulated_latency_ms() -> u64 {
    DEFAULT_SIMULATED_LATENCY_MS
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            use_local_classifier: default_use_local_classifier(),
            api_base_url: default_api_base_url(),
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

/// Partial configuration override
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub use_local_classifier: Option<bool>,
    pub api_base_url: Option<String>,
    pub simulated_latency_ms: Option<u64>,
}

impl SurveyConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(local) = update.use_local_classifier {
            self.use_local_classifier = local;
        }
        if let Some(url) = update.api_base_url {
            self.api_base_url = url;
        }
        if let Some(latency) = update.simulated_latency_ms {
            self.simulated_latency_ms = latency;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.use_local_classifier {
            if self.api_base_url.trim().is_empty() {
                return Err("apiBaseUrl must not be empty when remote submission is used".into());
            }
            leisure_survey_remote::endpoint_url(&self.api_base_url).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}
