//! Survey Commands
//!
//! Entry points a presenter calls for each user action. Every command
//! returns the session's fresh view wrapped in a `CommandResponse`.

use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use leisure_survey_core::{Choice, NumericField};

use crate::models::response::CommandResponse;
use crate::models::settings::SurveyConfig;
use crate::models::view::SurveyView;
use crate::services::session::SurveySession;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Run an action against the active session and wrap the outcome
async fn respond<F, Fut>(
    state: &AppState,
    action: &'static str,
    f: F,
) -> CommandResponse<SurveyView>
where
    F: FnOnce(Arc<SurveySession>) -> Fut,
    Fut: Future<Output = AppResult<SurveyView>>,
{
    let result = match state.session().await {
        Ok(session) => f(session).await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        warn!(action, error = %e, "Survey command rejected");
    }
    result.into()
}

/// Current view without changing anything
pub async fn get_survey_view(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "view", |s| async move { Ok(s.view().await) }).await)
}

/// Get the startup configuration
pub async fn get_survey_config(state: &AppState) -> Result<CommandResponse<SurveyConfig>, String> {
    match state.get_config().await {
        Ok(config) => Ok(CommandResponse::ok(config)),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Leave the start screen
pub async fn start_survey(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "start", |s| async move { s.start().await }).await)
}

/// Return from the first step to the start screen
pub async fn back_to_start(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "back_to_start", |s| async move { s.back_to_start().await }).await)
}

/// Record a categorical answer
pub async fn select_option(
    state: &AppState,
    choice: Choice,
) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "select_option", |s| async move { s.select_option(choice).await }).await)
}

/// Record a numeric answer from raw text
pub async fn set_number(
    state: &AppState,
    field: NumericField,
    value: String,
) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "set_number", |s| async move { s.set_number(field, &value).await }).await)
}

/// Advance one step
pub async fn next_step(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "next", |s| async move { s.go_next().await }).await)
}

/// Go back one step
pub async fn prev_step(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "prev", |s| async move { s.go_prev().await }).await)
}

/// Submit the answers and wait for the result
pub async fn finish_survey(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "finish", |s| async move { s.finish().await }).await)
}

/// Resubmit after a failed submission
pub async fn retry_submission(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "retry", |s| async move { s.retry().await }).await)
}

/// Clear everything and return to the start screen
pub async fn restart_survey(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "restart", |s| async move { Ok(s.restart().await) }).await)
}

/// Abandon an in-flight submission
pub async fn cancel_submission(state: &AppState) -> Result<CommandResponse<SurveyView>, String> {
    Ok(respond(state, "cancel", |s| async move { Ok(s.cancel().await) }).await)
}
