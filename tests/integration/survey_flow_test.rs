//! Survey Flow Integration Tests
//!
//! Drives a whole session through the command functions the way a
//! presenter would:
//! - Start, answer every step, finish and read the result
//! - Step gating on hours, rates and the first activity pick
//! - Restart and cancel semantics
//!
//! The local classifier runs with zero simulated latency.

use std::sync::Arc;

use leisure_survey::{
    back_to_start, cancel_submission, finish_survey, get_survey_view, next_step, prev_step,
    restart_survey, select_option, set_number, start_survey, AppState, ConfigService,
    RecordingPresenter, Screen, SurveyConfig, SurveyView,
};
use leisure_survey_core::{
    ActivityRank, Choice, HouseholdIncome, LeisureActivity, LeisurePurpose, LeisurePurpose2,
    NumericField, LAST_STEP, STEP_COUNT,
};

// ============================================================================
// Helpers
// ============================================================================

async fn local_state() -> AppState {
    let state = AppState::new();
    let config = ConfigService::new(SurveyConfig {
        use_local_classifier: true,
        simulated_latency_ms: 0,
        ..Default::default()
    })
    .unwrap();
    state.initialize(config).await.unwrap();
    state
}

async fn view(state: &AppState) -> SurveyView {
    get_survey_view(state).await.unwrap().data.unwrap()
}

async fn next(state: &AppState) -> SurveyView {
    next_step(state).await.unwrap().data.unwrap()
}

async fn number(state: &AppState, field: NumericField, value: &str) -> SurveyView {
    set_number(state, field, value.to_string())
        .await
        .unwrap()
        .data
        .unwrap()
}

async fn pick(state: &AppState, choice: Choice) -> SurveyView {
    select_option(state, choice).await.unwrap().data.unwrap()
}

async fn activity(state: &AppState, rank: ActivityRank, activity: LeisureActivity) -> SurveyView {
    pick(state, Choice::LeisureActivity { rank, activity }).await
}

/// Answer every step with a hobby-leaning profile, ending on the last step
async fn answer_everything(state: &AppState) {
    start_survey(state).await.unwrap();

    pick(state, Choice::HouseholdIncome(HouseholdIncome::From5To7M)).await;
    next(state).await;
    pick(state, Choice::LeisurePurpose(LeisurePurpose::SelfSatisfaction)).await;
    next(state).await;
    pick(state, Choice::LeisurePurpose2(LeisurePurpose2::StressRelief)).await;
    next(state).await;

    number(state, NumericField::WeekdayAvgLeisureTime, "4").await;
    number(state, NumericField::WeekendAvgLeisureTime, "8").await;
    next(state).await;

    number(state, NumericField::RestRecreationRate, "20").await;
    number(state, NumericField::HobbyRate, "50").await;
    number(state, NumericField::SelfImprovementRate, "20").await;
    number(state, NumericField::SocialRelationshipRate, "10").await;
    next(state).await;

    activity(state, ActivityRank::First, LeisureActivity::TravelOutdoor).await;
    next(state).await;
    activity(state, ActivityRank::Second, LeisureActivity::CultureArt).await;
    next(state).await;
    activity(state, ActivityRank::Third, LeisureActivity::TravelOutdoor).await;
    next(state).await;
    next(state).await;
    activity(state, ActivityRank::Fifth, LeisureActivity::Sports).await;
}

// ============================================================================
// Full flow
// ============================================================================

#[tokio::test]
async fn test_complete_survey_produces_raccoon() {
    let state = local_state().await;
    answer_everything(&state).await;

    let before = view(&state).await;
    assert_eq!(before.step_index, LAST_STEP);
    assert_eq!(before.progress_percent, 100);
    assert!(before.can_submit);

    let response = finish_survey(&state).await.unwrap();
    assert!(response.success);
    let done = response.data.unwrap();
    assert_eq!(done.screen, Screen::Result);
    assert!(!done.loading);
    assert!(done.error.is_none());

    let result = done.result.unwrap();
    assert_eq!(result.animal_name, "너구리");
    assert_eq!(
        result.analyze.interesting,
        vec!["여행/야외활동", "문화/예술", "스포츠/운동"]
    );
    assert_eq!(
        result.analyze.purpose,
        "1순위: 자기만족·즐거움을 위해, 2순위: 스트레스 해소를 위해"
    );
    // 4 * 5 + 8 * 2 = 36 hours per week
    assert_eq!(result.analyze.time_pattern, "활동적");
    assert!(result
        .cluster_description
        .unwrap()
        .contains("여행/야외활동"));
}

#[tokio::test]
async fn test_every_step_renders_to_presenter() {
    let presenter = Arc::new(RecordingPresenter::new());
    let state = AppState::new().with_presenter(presenter.clone());
    state
        .initialize(
            ConfigService::new(SurveyConfig {
                simulated_latency_ms: 0,
                ..Default::default()
            })
            .unwrap(),
        )
        .await
        .unwrap();

    answer_everything(&state).await;
    finish_survey(&state).await.unwrap();

    let frames = presenter.frames();
    let visited: Vec<usize> = frames
        .iter()
        .filter(|f| f.screen == Screen::Survey)
        .map(|f| f.step_index)
        .collect();
    for index in 0..STEP_COUNT {
        assert!(visited.contains(&index), "step {} never rendered", index);
    }
    assert!(frames.iter().any(|f| f.loading));
    assert!(presenter.last().unwrap().result.is_some());
}

// ============================================================================
// Step gating
// ============================================================================

#[tokio::test]
async fn test_rates_summing_to_95_block_step_four() {
    let state = local_state().await;
    start_survey(&state).await.unwrap();
    for _ in 0..4 {
        next(&state).await;
    }

    number(&state, NumericField::RestRecreationRate, "50").await;
    number(&state, NumericField::HobbyRate, "20").await;
    number(&state, NumericField::SelfImprovementRate, "20").await;
    let current = number(&state, NumericField::SocialRelationshipRate, "5").await;
    assert_eq!(current.validity.rate_total, 95);
    assert!(!current.validity.rate_total_ok);
    assert!(!current.can_advance);

    assert_eq!(next(&state).await.step_index, 4);

    number(&state, NumericField::SocialRelationshipRate, "10").await;
    assert_eq!(next(&state).await.step_index, 5);
}

#[tokio::test]
async fn test_hours_above_24_block_step_three() {
    let state = local_state().await;
    start_survey(&state).await.unwrap();
    for _ in 0..3 {
        next(&state).await;
    }

    let current = number(&state, NumericField::WeekendAvgLeisureTime, "25").await;
    assert!(!current.validity.weekend_avg_leisure_time);
    assert_eq!(next(&state).await.step_index, 3);

    number(&state, NumericField::WeekendAvgLeisureTime, "24").await;
    assert_eq!(next(&state).await.step_index, 4);
}

#[tokio::test]
async fn test_first_activity_required() {
    let state = local_state().await;
    start_survey(&state).await.unwrap();
    for _ in 0..4 {
        next(&state).await;
    }
    number(&state, NumericField::RestRecreationRate, "100").await;
    next(&state).await;

    let current = view(&state).await;
    assert_eq!(current.step_index, 5);
    assert_eq!(current.options.len(), 8);
    assert!(current.selected.is_none());
    assert_eq!(next(&state).await.step_index, 5);

    // An empty pick on the first rank is ignored
    activity(&state, ActivityRank::First, LeisureActivity::None).await;
    assert_eq!(next(&state).await.step_index, 5);

    let current = activity(&state, ActivityRank::First, LeisureActivity::DailyRest).await;
    assert_eq!(current.selected, Some(7));
    assert_eq!(next(&state).await.step_index, 6);
}

#[tokio::test]
async fn test_boundary_moves_are_noops() {
    let state = local_state().await;
    start_survey(&state).await.unwrap();

    let first = prev_step(&state).await.unwrap().data.unwrap();
    assert_eq!(first.step_index, 0);
    assert_eq!(first.screen, Screen::Survey);

    restart_survey(&state).await.unwrap();
    answer_everything(&state).await;
    let last = next(&state).await;
    assert_eq!(last.step_index, LAST_STEP);
}

#[tokio::test]
async fn test_back_to_start_from_first_step() {
    let state = local_state().await;
    start_survey(&state).await.unwrap();

    let response = back_to_start(&state).await.unwrap();
    assert_eq!(response.data.unwrap().screen, Screen::Start);

    // Survey verbs are rejected on the start screen
    let response = next_step(&state).await.unwrap();
    assert!(!response.success);
    assert!(response.error.unwrap().starts_with("Invalid action"));
}

// ============================================================================
// Restart and cancel
// ============================================================================

#[tokio::test]
async fn test_restart_after_result_clears_answers() {
    let state = local_state().await;
    answer_everything(&state).await;
    finish_survey(&state).await.unwrap();

    let cleared = restart_survey(&state).await.unwrap().data.unwrap();
    assert_eq!(cleared.screen, Screen::Start);
    assert!(cleared.result.is_none());
    assert!(cleared.error.is_none());

    let fresh = start_survey(&state).await.unwrap().data.unwrap();
    assert_eq!(fresh.step_index, 0);
    assert_eq!(fresh.selected, Some(HouseholdIncome::NoAnswer.code()));
    assert_eq!(fresh.validity.rate_total, 0);
    assert!(!fresh.validity.activity1_picked);
}

#[tokio::test]
async fn test_cancel_without_submission_changes_nothing() {
    let state = local_state().await;
    answer_everything(&state).await;

    let current = cancel_submission(&state).await.unwrap().data.unwrap();
    assert_eq!(current.screen, Screen::Survey);
    assert_eq!(current.step_index, LAST_STEP);
    assert!(current.error.is_none());
}

// ============================================================================
// Extreme numeric input
// ============================================================================

#[tokio::test]
async fn test_huge_rate_input_keeps_session_alive() {
    let state = local_state().await;
    start_survey(&state).await.unwrap();
    for _ in 0..4 {
        next(&state).await;
    }

    number(&state, NumericField::RestRecreationRate, "9223372036854775807").await;
    let current = number(&state, NumericField::HobbyRate, "1").await;
    assert_eq!(current.validity.rate_total, i64::MAX);
    assert!(!current.validity.rate_total_ok);
    assert!(!current.can_advance);
    assert_eq!(next(&state).await.step_index, 4);
}

#[tokio::test]
async fn test_hours_changed_after_step_three_still_score() {
    let state = local_state().await;
    answer_everything(&state).await;

    // Back on the hours step an out-of-range value blocks the step again
    for _ in 0..(LAST_STEP - 3) {
        prev_step(&state).await.unwrap();
    }
    let hours = number(&state, NumericField::WeekdayAvgLeisureTime, "9223372036854775807").await;
    assert_eq!(hours.step_index, 3);
    assert!(!hours.can_advance);
    number(&state, NumericField::WeekdayAvgLeisureTime, "4").await;
    for _ in 3..LAST_STEP {
        next(&state).await;
    }

    // Submission only rechecks the rates
    let last = number(&state, NumericField::WeekdayAvgLeisureTime, "9223372036854775807").await;
    assert_eq!(last.step_index, LAST_STEP);
    assert!(!last.validity.weekday_avg_leisure_time);
    assert!(last.can_submit);

    let response = finish_survey(&state).await.unwrap();
    assert!(response.success);
    let result = response.data.unwrap().result.unwrap();
    assert_eq!(result.animal_name, "너구리");
    assert_eq!(result.analyze.time_pattern, "활동적");
}
