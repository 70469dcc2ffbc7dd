//! Survey Session
//!
//! Drives one user's pass through the survey: screen flow, the state
//! machine, the submission call and its cancellation, and the
//! result/error/loading flags the presenter shows.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use leisure_survey_core::{
    AnimalResult, Choice, NumericField, SurveyAnswer, SurveyError, SurveyMachine, SurveyStep,
    SurveySubmitter, STEP_COUNT,
};

use crate::models::view::{NumberInput, Screen, SurveyView};
use crate::services::presenter::Presenter;
use crate::utils::error::{AppError, AppResult};

/// A submission that has not come back yet
struct InFlight {
    generation: u64,
    token: CancellationToken,
}

/// Mutable session state, guarded by the session lock
struct SessionState {
    screen: Screen,
    machine: SurveyMachine,
    last_payload: Option<SurveyAnswer>,
    result: Option<AnimalResult>,
    loading: bool,
    error: Option<String>,
    in_flight: Option<InFlight>,
    generation: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            screen: Screen::Start,
            machine: SurveyMachine::new(),
            last_payload: None,
            result: None,
            loading: false,
            error: None,
            in_flight: None,
            generation: 0,
        }
    }

    fn require_survey(&self, action: &str) -> AppResult<()> {
        if self.screen != Screen::Survey {
            return Err(AppError::invalid_action(format!(
                "{} is only available on the survey screen",
                action
            )));
        }
        Ok(())
    }

    /// Abandon the in-flight submission, if any
    fn abandon_in_flight(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.token.cancel();
                self.loading = false;
                true
            }
            None => false,
        }
    }
}

/// One survey session
pub struct SurveySession {
    id: String,
    submitter: Arc<dyn SurveySubmitter>,
    presenter: Option<Arc<dyn Presenter>>,
    state: Mutex<SessionState>,
}

impl SurveySession {
    /// Create a session on the start screen
    pub fn new(submitter: Arc<dyn SurveySubmitter>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            submitter,
            presenter: None,
            state: Mutex::new(SessionState::new()),
        }
    }

    /// Attach a presenter that is handed a view after every change
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Session identifier used in logs
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current snapshot
    pub async fn view(&self) -> SurveyView {
        let state = self.state.lock().await;
        self.build_view(&state)
    }

    /// Leave the start screen and begin a fresh survey
    pub async fn start(&self) -> AppResult<SurveyView> {
        let mut state = self.state.lock().await;
        if state.screen != Screen::Start {
            return Err(AppError::invalid_action("survey already started"));
        }
        state.machine.reset();
        state.screen = Screen::Survey;
        debug!(session_id = %self.id, "Survey started");
        Ok(self.publish(&state))
    }

    /// Go back from the first survey step to the start screen
    pub async fn back_to_start(&self) -> AppResult<SurveyView> {
        let mut state = self.state.lock().await;
        state.require_survey("back to start")?;
        if state.machine.step_index() != 0 {
            return Err(AppError::invalid_action(
                "back to start is only available on the first step",
            ));
        }
        state.screen = Screen::Start;
        Ok(self.publish(&state))
    }

    /// Record a categorical answer
    pub async fn select_option(&self, choice: Choice) -> AppResult<SurveyView> {
        let mut state = self.state.lock().await;
        state.require_survey("select option")?;
        state.machine.select_option(choice);
        Ok(self.publish(&state))
    }

    /// Record a numeric answer from raw text
    pub async fn set_number(&self, field: NumericField, raw: &str) -> AppResult<SurveyView> {
        let mut state = self.state.lock().await;
        state.require_survey("set number")?;
        state.machine.set_number(field, raw);
        Ok(self.publish(&state))
    }

    /// Advance one step if the current step is satisfied
    pub async fn go_next(&self) -> AppResult<SurveyView> {
        let mut state = self.state.lock().await;
        state.require_survey("next")?;
        state.machine.go_next();
        Ok(self.publish(&state))
    }

    /// Go back one step
    pub async fn go_prev(&self) -> AppResult<SurveyView> {
        let mut state = self.state.lock().await;
        state.require_survey("previous")?;
        state.machine.go_prev();
        Ok(self.publish(&state))
    }

    /// Freeze the answers and submit them.
    ///
    /// Transport failures are reported through the returned view's `error`;
    /// only flow violations are returned as `Err`.
    pub async fn finish(&self) -> AppResult<SurveyView> {
        let payload = {
            let state = self.state.lock().await;
            state.require_survey("finish")?;
            state.machine.finish().map_err(|e| {
                warn!(session_id = %self.id, error = %e, "Finish requested before survey was complete");
                AppError::from(e)
            })?
        };
        self.submit_payload(payload).await
    }

    /// Resubmit the last payload after a failed attempt
    pub async fn retry(&self) -> AppResult<SurveyView> {
        let payload = {
            let state = self.state.lock().await;
            if state.screen != Screen::Result || state.loading || state.error.is_none() {
                return Err(AppError::invalid_action("nothing to retry"));
            }
            state
                .last_payload
                .clone()
                .ok_or_else(|| AppError::invalid_action("nothing to retry"))?
        };
        info!(session_id = %self.id, "Retrying survey submission");
        self.submit_payload(payload).await
    }

    /// Abandon any submission and clear everything back to the start screen
    pub async fn restart(&self) -> SurveyView {
        let mut state = self.state.lock().await;
        if state.abandon_in_flight() {
            debug!(session_id = %self.id, "Abandoned in-flight submission on restart");
        }
        let generation = state.generation;
        *state = SessionState::new();
        state.generation = generation;
        self.publish(&state)
    }

    /// Abandon the in-flight submission and return to the survey with the
    /// answers intact. No-op when nothing is in flight.
    pub async fn cancel(&self) -> SurveyView {
        let mut state = self.state.lock().await;
        if state.abandon_in_flight() {
            debug!(session_id = %self.id, "Submission cancelled by user");
            state.screen = Screen::Survey;
            state.result = None;
            state.error = None;
        }
        self.publish(&state)
    }

    async fn submit_payload(&self, payload: SurveyAnswer) -> AppResult<SurveyView> {
        let (generation, token) = {
            let mut state = self.state.lock().await;
            state.abandon_in_flight();
            state.generation += 1;
            let generation = state.generation;
            let token = CancellationToken::new();
            state.in_flight = Some(InFlight {
                generation,
                token: token.clone(),
            });
            state.last_payload = Some(payload.clone());
            state.screen = Screen::Result;
            state.loading = true;
            state.error = None;
            state.result = None;
            self.publish(&state);
            (generation, token)
        };

        info!(
            session_id = %self.id,
            submitter = self.submitter.name(),
            generation,
            "Submitting survey"
        );

        let outcome = tokio::select! {
            _ = token.cancelled() => Err(SurveyError::Cancelled),
            result = self.submitter.submit(&payload) => result,
        };

        let mut state = self.state.lock().await;
        let current = state
            .in_flight
            .as_ref()
            .map(|in_flight| in_flight.generation == generation)
            .unwrap_or(false);
        if !current || token.is_cancelled() {
            debug!(session_id = %self.id, generation, "Discarding abandoned submission outcome");
            return Ok(self.build_view(&state));
        }

        state.in_flight = None;
        state.loading = false;
        match outcome {
            Ok(result) => {
                info!(session_id = %self.id, animal = %result.animal_name, "Survey scored");
                state.result = Some(result);
            }
            Err(SurveyError::Cancelled) => {
                debug!(session_id = %self.id, "Submitter reported cancellation");
                state.screen = Screen::Survey;
            }
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "Survey submission failed");
                state.error = Some(e.to_string());
            }
        }
        Ok(self.publish(&state))
    }

    fn publish(&self, state: &SessionState) -> SurveyView {
        let view = self.build_view(state);
        if let Some(presenter) = &self.presenter {
            presenter.render(&view);
        }
        view
    }

    fn build_view(&self, state: &SessionState) -> SurveyView {
        let machine = &state.machine;
        let step = machine.step();
        let answer = machine.answer();

        SurveyView {
            session_id: self.id.clone(),
            screen: state.screen,
            step,
            step_index: machine.step_index(),
            step_count: STEP_COUNT,
            prompt: step.prompt(),
            options: step.options(),
            selected: selected_code(machine, step),
            inputs: step
                .numeric_fields()
                .iter()
                .map(|&field| NumberInput {
                    field,
                    label: field.label(),
                    value: answer.number(field),
                    max: field.max(),
                })
                .collect(),
            progress: machine.progress(),
            progress_percent: machine.progress_percent(),
            can_advance: machine.can_advance(machine.step_index()),
            can_submit: machine.can_submit(),
            is_last_step: machine.is_last_step(),
            validity: machine.field_validity(),
            result: state.result.clone(),
            loading: state.loading,
            error: state.error.clone(),
            can_retry: state.error.is_some() && state.last_payload.is_some(),
        }
    }
}

/// Code of the answer currently held by a choice step
fn selected_code(machine: &SurveyMachine, step: SurveyStep) -> Option<u8> {
    let answer = machine.answer();
    match step {
        SurveyStep::HouseholdIncome => Some(answer.household_income.code()),
        SurveyStep::LeisurePurpose => Some(answer.leisure_purpose.code()),
        SurveyStep::LeisurePurpose2 => Some(answer.leisure_purpose2.code()),
        SurveyStep::LeisureHours | SurveyStep::LeisureRates => None,
        // Unanswered first rank shows no selection
        SurveyStep::Activity1 if !machine.activity1_picked() => None,
        _ => step
            .activity_rank()
            .map(|rank| answer.activities()[rank.number() - 1].code()),
    }
}
