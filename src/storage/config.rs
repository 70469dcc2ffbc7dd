//! Configuration Loading
//!
//! Resolves the survey configuration once at process start, either from
//! environment variables or from a JSON file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::models::settings::{SettingsUpdate, SurveyConfig};
use crate::utils::error::{AppError, AppResult};

/// Selects local classification ("true"/"1") or remote submission
pub const ENV_USE_LOCAL: &str = "LEISURE_SURVEY_USE_LOCAL";
/// Base URL of the scoring API
pub const ENV_API_BASE_URL: &str = "LEISURE_SURVEY_API_BASE_URL";
/// Simulated latency of the local classifier in milliseconds
pub const ENV_LATENCY_MS: &str = "LEISURE_SURVEY_LATENCY_MS";

/// Configuration service holding the validated startup configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    config: SurveyConfig,
}

impl ConfigService {
    /// Wrap an explicit configuration after validating it
    pub fn new(config: SurveyConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::config)?;
        Ok(Self { config })
    }

    /// Load from the process environment; unset variables keep defaults
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut update = SettingsUpdate::default();

        if let Some(raw) = lookup(ENV_USE_LOCAL) {
            update.use_local_classifier = Some(parse_flag(ENV_USE_LOCAL, &raw)?);
        }
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            update.api_base_url = Some(url);
        }
        if let Some(raw) = lookup(ENV_LATENCY_MS) {
            let latency = raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("{} must be a whole number: {}", ENV_LATENCY_MS, e))
            })?;
            update.simulated_latency_ms = Some(latency);
        }

        let mut config = SurveyConfig::default();
        config.apply_update(update);
        let service = Self::new(config)?;
        info!(
            local = service.config.use_local_classifier,
            "Loaded survey configuration"
        );
        Ok(service)
    }

    /// Load from a JSON file; missing keys keep defaults
    pub fn load_from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: SurveyConfig = serde_json::from_str(&content)?;
        Self::new(config)
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Get a clone of the current configuration
    pub fn get_config_clone(&self) -> SurveyConfig {
        self.config.clone()
    }
}

fn parse_flag(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
