//! Survey State Machine
//!
//! Owns the in-progress answer set and the step pointer. Each of the ten
//! steps has a pure validity predicate; the pointer only moves forward when
//! the current step's predicate holds, and the finished payload is only
//! released once the rate-sum invariant is satisfied on the last step.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::answer::{ActivityRank, Choice, NumericField, SurveyAnswer, RATE_TOTAL};
use crate::error::{SurveyError, SurveyResult};
use crate::options::{
    HouseholdIncome, LeisureActivity, LeisurePurpose, LeisurePurpose2, OptionItem,
};

/// Number of survey steps
pub const STEP_COUNT: usize = 10;

/// Index of the last step
pub const LAST_STEP: usize = STEP_COUNT - 1;

/// One screen of the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStep {
    HouseholdIncome,
    LeisurePurpose,
    LeisurePurpose2,
    LeisureHours,
    LeisureRates,
    Activity1,
    Activity2,
    Activity3,
    Activity4,
    Activity5,
}

impl SurveyStep {
    /// Steps in survey order
    pub const ALL: [SurveyStep; STEP_COUNT] = [
        Self::HouseholdIncome,
        Self::LeisurePurpose,
        Self::LeisurePurpose2,
        Self::LeisureHours,
        Self::LeisureRates,
        Self::Activity1,
        Self::Activity2,
        Self::Activity3,
        Self::Activity4,
        Self::Activity5,
    ];

    /// Step at the given index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based position in the survey
    pub fn index(self) -> usize {
        match self {
            Self::HouseholdIncome => 0,
            Self::LeisurePurpose => 1,
            Self::LeisurePurpose2 => 2,
            Self::LeisureHours => 3,
            Self::LeisureRates => 4,
            Self::Activity1 => 5,
            Self::Activity2 => 6,
            Self::Activity3 => 7,
            Self::Activity4 => 8,
            Self::Activity5 => 9,
        }
    }

    /// Question text shown above the inputs
    pub fn prompt(self) -> &'static str {
        match self {
            Self::HouseholdIncome => "당신의 월 가구 소득 정도를 선택해주세요.",
            Self::LeisurePurpose => "여가시간의 사용 목적 1순위는 무엇일까요?",
            Self::LeisurePurpose2 => "여가시간의 사용 목적 2순위는 무엇일까요?",
            Self::LeisureHours => "일평균 여가시간을 적어주세요.",
            Self::LeisureRates => "여가시간 중 사용 비율을 적어주세요.",
            Self::Activity1 => "관심 여가활동의 1순위를 골라주세요",
            Self::Activity2 => "관심 여가활동의 2순위를 골라주세요",
            Self::Activity3 => "관심 여가활동의 3순위를 골라주세요",
            Self::Activity4 => "관심 여가활동의 4순위를 골라주세요",
            Self::Activity5 => "관심 여가활동의 5순위를 골라주세요",
        }
    }

    /// Selectable options; empty for the numeric steps
    pub fn options(self) -> Vec<OptionItem> {
        match self {
            Self::HouseholdIncome => HouseholdIncome::options(),
            Self::LeisurePurpose => LeisurePurpose::options(),
            Self::LeisurePurpose2 => LeisurePurpose2::options(),
            Self::LeisureHours | Self::LeisureRates => Vec::new(),
            Self::Activity1 => LeisureActivity::required_options(),
            Self::Activity2 | Self::Activity3 | Self::Activity4 | Self::Activity5 => {
                LeisureActivity::options()
            }
        }
    }

    /// Numeric inputs shown on this step
    pub fn numeric_fields(self) -> &'static [NumericField] {
        match self {
            Self::LeisureHours => &[
                NumericField::WeekdayAvgLeisureTime,
                NumericField::WeekendAvgLeisureTime,
            ],
            Self::LeisureRates => &[
                NumericField::RestRecreationRate,
                NumericField::HobbyRate,
                NumericField::SelfImprovementRate,
                NumericField::SocialRelationshipRate,
            ],
            _ => &[],
        }
    }

    /// Interest-rank slot edited by this step, if any
    pub fn activity_rank(self) -> Option<ActivityRank> {
        match self {
            Self::Activity1 => Some(ActivityRank::First),
            Self::Activity2 => Some(ActivityRank::Second),
            Self::Activity3 => Some(ActivityRank::Third),
            Self::Activity4 => Some(ActivityRank::Fourth),
            Self::Activity5 => Some(ActivityRank::Fifth),
            _ => None,
        }
    }
}

type StepRule = fn(&SurveyMachine) -> bool;

fn always(_: &SurveyMachine) -> bool {
    true
}

fn hours_in_range(machine: &SurveyMachine) -> bool {
    machine.answer.hours_in_range()
}

fn rates_balanced(machine: &SurveyMachine) -> bool {
    machine.answer.rates_balanced()
}

fn first_activity_picked(machine: &SurveyMachine) -> bool {
    machine.activity1_picked
}

/// Validity predicate per step, indexed by step index
const STEP_RULES: [StepRule; STEP_COUNT] = [
    always,
    always,
    always,
    hours_in_range,
    rates_balanced,
    first_activity_picked,
    always,
    always,
    always,
    always,
];

/// Per-input validity for presenters that highlight bad fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidity {
    pub weekday_avg_leisure_time: bool,
    pub weekend_avg_leisure_time: bool,
    pub rest_recreation_rate: bool,
    pub hobby_rate: bool,
    pub self_improvement_rate: bool,
    pub social_relationship_rate: bool,
    /// Current sum of the four rates
    pub rate_total: i64,
    /// Whether the rates sum to exactly 100
    pub rate_total_ok: bool,
    /// Whether the first activity rank has been answered
    pub activity1_picked: bool,
}

/// Survey state: answers, step pointer and the first-activity pick flag.
///
/// `activity1_picked` is tracked apart from the answer so that "not yet
/// answered" can be told apart from the enum default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyMachine {
    answer: SurveyAnswer,
    step_index: usize,
    activity1_picked: bool,
}

impl SurveyMachine {
    /// Fresh survey at the first step with default answers
    pub fn new() -> Self {
        Self::default()
    }

    /// Current answers
    pub fn answer(&self) -> &SurveyAnswer {
        &self.answer
    }

    /// Current step index (0..=9)
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Current step
    pub fn step(&self) -> SurveyStep {
        SurveyStep::ALL[self.step_index.min(LAST_STEP)]
    }

    /// Whether the first activity rank has been answered
    pub fn activity1_picked(&self) -> bool {
        self.activity1_picked
    }

    /// Whether the pointer is on the last step
    pub fn is_last_step(&self) -> bool {
        self.step_index == LAST_STEP
    }

    /// Record a categorical answer. The step pointer is left alone.
    ///
    /// Picking "none" for the first activity rank is ignored; returns whether
    /// the choice was applied.
    pub fn select_option(&mut self, choice: Choice) -> bool {
        if let Choice::LeisureActivity {
            rank: ActivityRank::First,
            activity,
        } = choice
        {
            if !activity.is_some() {
                debug!("Ignoring empty pick for first activity rank");
                return false;
            }
            self.activity1_picked = true;
        }
        self.answer.apply(choice);
        true
    }

    /// Record a numeric answer from raw text input.
    ///
    /// Input is trimmed and parsed as an integer. Blank or unparsable input
    /// becomes 0. Values are stored unclamped; the step predicates reject
    /// anything outside the field's domain.
    pub fn set_number(&mut self, field: NumericField, raw: &str) -> i64 {
        let value = parse_number(raw);
        self.answer.set_number(field, value);
        value
    }

    /// Move to the next step if the current one is satisfied
    pub fn go_next(&mut self) -> bool {
        if self.is_last_step() {
            return false;
        }
        if !self.can_advance(self.step_index) {
            debug!(step = self.step_index, "Step not satisfied, staying put");
            return false;
        }
        self.step_index += 1;
        debug!(step = self.step_index, "Advanced survey step");
        true
    }

    /// Move to the previous step
    pub fn go_prev(&mut self) -> bool {
        if self.step_index == 0 {
            return false;
        }
        self.step_index -= 1;
        debug!(step = self.step_index, "Returned to previous survey step");
        true
    }

    /// Whether the given step's predicate holds. Unknown steps never do.
    pub fn can_advance(&self, step_index: usize) -> bool {
        STEP_RULES
            .get(step_index)
            .map(|rule| rule(self))
            .unwrap_or(false)
    }

    /// Whether the survey may be submitted.
    ///
    /// Only the rate-sum invariant is rechecked here; the other steps were
    /// gated on the way in.
    pub fn can_submit(&self) -> bool {
        self.is_last_step() && self.answer.rates_balanced()
    }

    /// Freeze the answers into a payload
    pub fn finish(&self) -> SurveyResult<SurveyAnswer> {
        if !self.is_last_step() {
            return Err(SurveyError::incomplete(format!(
                "survey is on step {} of {}",
                self.step_index + 1,
                STEP_COUNT
            )));
        }
        if !self.answer.rates_balanced() {
            return Err(SurveyError::incomplete(format!(
                "leisure rates sum to {} instead of 100",
                self.answer.rate_total()
            )));
        }
        Ok(self.answer.clone())
    }

    /// Progress through the survey in [0, 1]
    pub fn progress(&self) -> f64 {
        (self.step_index as f64 / LAST_STEP as f64).clamp(0.0, 1.0)
    }

    /// Progress as a rounded percentage
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0).round() as u8
    }

    /// Validity of every input field
    pub fn field_validity(&self) -> FieldValidity {
        let in_domain = |field: NumericField| {
            let value = self.answer.number(field);
            (0..=field.max()).contains(&value)
        };
        FieldValidity {
            weekday_avg_leisure_time: in_domain(NumericField::WeekdayAvgLeisureTime),
            weekend_avg_leisure_time: in_domain(NumericField::WeekendAvgLeisureTime),
            rest_recreation_rate: in_domain(NumericField::RestRecreationRate),
            hobby_rate: in_domain(NumericField::HobbyRate),
            self_improvement_rate: in_domain(NumericField::SelfImprovementRate),
            social_relationship_rate: in_domain(NumericField::SocialRelationshipRate),
            rate_total: self.answer.rate_total(),
            rate_total_ok: self.answer.rate_total() == RATE_TOTAL,
            activity1_picked: self.activity1_picked,
        }
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Coerce raw numeric input: trimmed integer, anything else is 0
fn parse_number(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    // "7.0" style input from number fields
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => value as i64,
        _ => 0,
    }
}
