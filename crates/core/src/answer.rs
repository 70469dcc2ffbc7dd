//! Survey Answer Types
//!
//! The answer set collected by the survey and the field selectors the
//! presenter uses to mutate it. The JSON shape (camelCase keys, integer enum
//! codes) is the payload the remote scorer accepts.

use serde::{Deserialize, Serialize};

use crate::options::{HouseholdIncome, LeisureActivity, LeisurePurpose, LeisurePurpose2};

/// Upper bound for the daily leisure-hour inputs
pub const MAX_DAILY_HOURS: i64 = 24;

/// Upper bound for a single percentage input
pub const MAX_RATE: i64 = 100;

/// The four percentage inputs must add up to this
pub const RATE_TOTAL: i64 = 100;

/// Complete set of survey responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswer {
    pub household_income: HouseholdIncome,
    pub leisure_purpose: LeisurePurpose,
    pub leisure_purpose2: LeisurePurpose2,
    pub weekday_avg_leisure_time: i64,
    pub weekend_avg_leisure_time: i64,
    pub rest_recreation_rate: i64,
    pub hobby_rate: i64,
    pub self_improvement_rate: i64,
    pub social_relationship_rate: i64,
    pub leisure_activity1: LeisureActivity,
    pub leisure_activity2: LeisureActivity,
    pub leisure_activity3: LeisureActivity,
    pub leisure_activity4: LeisureActivity,
    pub leisure_activity5: LeisureActivity,
}

impl SurveyAnswer {
    /// Sum of the four percentage inputs, clamped to the `i64` range.
    ///
    /// Inputs are stored unclamped, so the sum is taken over `i128`; a
    /// clamped total can only equal 100 when the exact sum does.
    pub fn rate_total(&self) -> i64 {
        let total: i128 = self.rates().iter().map(|&rate| i128::from(rate)).sum();
        clamp_to_i64(total)
    }

    /// Whether every rate is within [0, 100] and they sum to exactly 100
    pub fn rates_balanced(&self) -> bool {
        self.rates().iter().all(|rate| (0..=MAX_RATE).contains(rate))
            && self.rate_total() == RATE_TOTAL
    }

    /// Whether both daily-hour inputs are within [0, 24]
    pub fn hours_in_range(&self) -> bool {
        hours_valid(self.weekday_avg_leisure_time) && hours_valid(self.weekend_avg_leisure_time)
    }

    /// Estimated weekly leisure hours (five weekdays plus two weekend days)
    pub fn weekly_leisure_hours(&self) -> i64 {
        let weekly = i128::from(self.weekday_avg_leisure_time) * 5
            + i128::from(self.weekend_avg_leisure_time) * 2;
        clamp_to_i64(weekly)
    }

    /// Rates in field order: rest, hobby, self-improvement, social
    pub fn rates(&self) -> [i64; 4] {
        [
            self.rest_recreation_rate,
            self.hobby_rate,
            self.self_improvement_rate,
            self.social_relationship_rate,
        ]
    }

    /// Interest-rank slots in rank order
    pub fn activities(&self) -> [LeisureActivity; 5] {
        [
            self.leisure_activity1,
            self.leisure_activity2,
            self.leisure_activity3,
            self.leisure_activity4,
            self.leisure_activity5,
        ]
    }

    /// Read a numeric field
    pub fn number(&self, field: NumericField) -> i64 {
        match field {
            NumericField::WeekdayAvgLeisureTime => self.weekday_avg_leisure_time,
            NumericField::WeekendAvgLeisureTime => self.weekend_avg_leisure_time,
            NumericField::RestRecreationRate => self.rest_recreation_rate,
            NumericField::HobbyRate => self.hobby_rate,
            NumericField::SelfImprovementRate => self.self_improvement_rate,
            NumericField::SocialRelationshipRate => self.social_relationship_rate,
        }
    }

    /// Overwrite a numeric field
    pub fn set_number(&mut self, field: NumericField, value: i64) {
        let slot = match field {
            NumericField::WeekdayAvgLeisureTime => &mut self.weekday_avg_leisure_time,
            NumericField::WeekendAvgLeisureTime => &mut self.weekend_avg_leisure_time,
            NumericField::RestRecreationRate => &mut self.rest_recreation_rate,
            NumericField::HobbyRate => &mut self.hobby_rate,
            NumericField::SelfImprovementRate => &mut self.self_improvement_rate,
            NumericField::SocialRelationshipRate => &mut self.social_relationship_rate,
        };
        *slot = value;
    }

    /// Apply a categorical choice
    pub fn apply(&mut self, choice: Choice) {
        match choice {
            Choice::HouseholdIncome(v) => self.household_income = v,
            Choice::LeisurePurpose(v) => self.leisure_purpose = v,
            Choice::LeisurePurpose2(v) => self.leisure_purpose2 = v,
            Choice::LeisureActivity { rank, activity } => match rank {
                ActivityRank::First => self.leisure_activity1 = activity,
                ActivityRank::Second => self.leisure_activity2 = activity,
                ActivityRank::Third => self.leisure_activity3 = activity,
                ActivityRank::Fourth => self.leisure_activity4 = activity,
                ActivityRank::Fifth => self.leisure_activity5 = activity,
            },
        }
    }
}

fn clamp_to_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

fn hours_valid(hours: i64) -> bool {
    (0..=MAX_DAILY_HOURS).contains(&hours)
}

/// Free-form numeric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericField {
    WeekdayAvgLeisureTime,
    WeekendAvgLeisureTime,
    RestRecreationRate,
    HobbyRate,
    SelfImprovementRate,
    SocialRelationshipRate,
}

impl NumericField {
    /// Inclusive domain the value must fall into
    pub fn max(self) -> i64 {
        match self {
            Self::WeekdayAvgLeisureTime | Self::WeekendAvgLeisureTime => MAX_DAILY_HOURS,
            _ => MAX_RATE,
        }
    }

    /// Display label of the input
    pub fn label(self) -> &'static str {
        match self {
            Self::WeekdayAvgLeisureTime => "평일",
            Self::WeekendAvgLeisureTime => "주말",
            Self::RestRecreationRate => "휴식·오락 (%)",
            Self::HobbyRate => "취미 (%)",
            Self::SelfImprovementRate => "본인계발 (%)",
            Self::SocialRelationshipRate => "대인관계·교제 (%)",
        }
    }
}

/// Position of an interest-rank slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityRank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl ActivityRank {
    /// 1-based rank number
    pub fn number(self) -> usize {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
        }
    }
}

/// A categorical answer picked by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum Choice {
    HouseholdIncome(HouseholdIncome),
    LeisurePurpose(LeisurePurpose),
    LeisurePurpose2(LeisurePurpose2),
    LeisureActivity {
        rank: ActivityRank,
        activity: LeisureActivity,
    },
}
