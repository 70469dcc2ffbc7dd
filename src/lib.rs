//! Leisure Survey - Application Library
//!
//! Wires the survey core into a runnable session:
//! - Survey commands for presenter actions
//! - Session control with cancellable submission
//! - Startup configuration (environment or JSON file)
//! - View models and the command response envelope

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use commands::{
    back_to_start, cancel_submission, finish_survey, get_survey_config, get_survey_view,
    next_step, prev_step, restart_survey, retry_submission, select_option, set_number,
    start_survey,
};
pub use models::response::*;
pub use models::settings::{SettingsUpdate, SurveyConfig};
pub use models::view::{NumberInput, Screen, SurveyView};
pub use services::{Presenter, RecordingPresenter, SurveySession};
pub use state::AppState;
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
