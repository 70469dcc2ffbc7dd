//! Application State
//!
//! Holds the startup configuration and the active survey session.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::settings::SurveyConfig;
use crate::services::presenter::Presenter;
use crate::services::session::SurveySession;
use crate::services::submission::build_submitter;
use crate::storage::ConfigService;
use crate::utils::error::{AppError, AppResult};

/// Application state shared by the survey commands
pub struct AppState {
    /// Configuration resolved at startup
    config: Arc<RwLock<Option<ConfigService>>>,
    /// Active survey session
    session: Arc<RwLock<Option<Arc<SurveySession>>>>,
    /// Presenter attached to every new session
    presenter: Option<Arc<dyn Presenter>>,
}

impl AppState {
    /// Create a new uninitialized app state
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            session: Arc::new(RwLock::new(None)),
            presenter: None,
        }
    }

    /// Attach a presenter to sessions created from now on
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Install the configuration and open a fresh session.
    ///
    /// Calling this again replaces the configuration and the session.
    pub async fn initialize(&self, config: ConfigService) -> AppResult<()> {
        let submitter = build_submitter(config.get_config())?;
        let mut session = SurveySession::new(submitter);
        if let Some(presenter) = &self.presenter {
            session = session.with_presenter(Arc::clone(presenter));
        }
        info!(session_id = %session.id(), "Survey session opened");

        *self.config.write().await = Some(config);
        *self.session.write().await = Some(Arc::new(session));
        Ok(())
    }

    /// Whether `initialize` has completed
    pub async fn is_initialized(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Get the current configuration
    pub async fn get_config(&self) -> AppResult<SurveyConfig> {
        let guard = self.config.read().await;
        match &*guard {
            Some(config) => Ok(config.get_config_clone()),
            None => Err(AppError::config("Config service not initialized")),
        }
    }

    /// Active session.
    ///
    /// The lock is released before returning so long-running session calls
    /// never block cancel or restart.
    pub async fn session(&self) -> AppResult<Arc<SurveySession>> {
        let guard = self.session.read().await;
        guard
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| AppError::invalid_action("Survey session not initialized"))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
