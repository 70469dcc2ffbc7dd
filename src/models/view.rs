//! View Models
//!
//! Snapshot of the session that a presenter renders after every action.

use serde::Serialize;

use leisure_survey_core::{AnimalResult, FieldValidity, NumericField, OptionItem, SurveyStep};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Start,
    Survey,
    Result,
}

/// A numeric input and its current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInput {
    pub field: NumericField,
    pub label: &'static str,
    pub value: i64,
    pub max: i64,
}

/// Everything a presenter needs for one frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyView {
    pub session_id: String,
    pub screen: Screen,
    pub step: SurveyStep,
    pub step_index: usize,
    pub step_count: usize,
    pub prompt: &'static str,
    pub options: Vec<OptionItem>,
    /// Code of the option currently selected on this step, if any
    pub selected: Option<u8>,
    pub inputs: Vec<NumberInput>,
    pub progress: f64,
    pub progress_percent: u8,
    pub can_advance: bool,
    pub can_submit: bool,
    pub is_last_step: bool,
    pub validity: FieldValidity,
    pub result: Option<AnimalResult>,
    pub loading: bool,
    pub error: Option<String>,
    pub can_retry: bool,
}
