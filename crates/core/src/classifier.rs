//! Reference Classifier
//!
//! Maps a finished answer set to an animal archetype and a short analysis.
//! This is the offline implementation of the scoring contract: deterministic,
//! side-effect free, and total over `SurveyAnswer`.

use serde::{Deserialize, Serialize};

use crate::answer::SurveyAnswer;
use crate::options::LeisureActivity;

/// Maximum number of labels in the interest list
pub const MAX_INTERESTS: usize = 3;

/// Weekly leisure hours above which the time pattern counts as active
pub const ACTIVE_WEEKLY_HOURS: i64 = 30;

/// Outcome category assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Social relationships dominate
    Dog,
    /// Self-improvement dominates
    Owl,
    /// Hobbies dominate
    Raccoon,
    /// Rest dominates, or nothing else wins the tie-break
    Cat,
}

impl Archetype {
    /// Pick the archetype from the four rates.
    ///
    /// Ties are broken in a fixed order: social, then self-improvement, then
    /// hobby. Rest never wins explicitly; it is the fallback.
    pub fn from_answer(answer: &SurveyAnswer) -> Self {
        let dominant = answer.rates().into_iter().max().unwrap_or_default();

        if answer.social_relationship_rate == dominant {
            Self::Dog
        } else if answer.self_improvement_rate == dominant {
            Self::Owl
        } else if answer.hobby_rate == dominant {
            Self::Raccoon
        } else {
            Self::Cat
        }
    }

    pub fn animal_name(self) -> &'static str {
        match self {
            Self::Dog => "강아지",
            Self::Owl => "부엉이",
            Self::Raccoon => "너구리",
            Self::Cat => "야옹이",
        }
    }

    pub fn animal_type(self) -> &'static str {
        match self {
            Self::Dog => "강아지는 사회적",
            Self::Owl => "부엉이는 탐구적",
            Self::Raccoon => "너구리는 다재다능",
            Self::Cat => "야옹이는 독립적",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Dog => "사람들과 함께하는 활동에서 에너지를 얻고 즐거움을 느낍니다.",
            Self::Owl => "지식·기술을 확장하는 행위를 여가의 중요한 목표로 봅니다.",
            Self::Raccoon => "취미 중심으로 다양한 활동을 시도하고 성취를 즐깁니다.",
            Self::Cat => {
                "이 유형은 개인의 즐거움보다 관계 형성과 유지를 여가의 핵심 동력으로 삼습니다."
            }
        }
    }

    pub fn animal_description(self) -> &'static str {
        match self {
            Self::Dog => "강아지는 교류를 사랑하고 팀 활동에 강점이 있어요.",
            Self::Owl => "부엉이는 호기심이 많고 집중력이 좋아요.",
            Self::Raccoon => "너구리는 손재주가 좋고 적응력이 높습니다.",
            Self::Cat => "야옹이는 자기만의 속도로 쉬어 가는 독립적인 동물이에요.",
        }
    }
}

/// Analysis block attached to a result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Summary of the ranked leisure purposes
    #[serde(default)]
    pub purpose: String,
    /// Weekly time-use pattern
    #[serde(default)]
    pub time_pattern: String,
    /// Up to three labels of the top-ranked activities
    #[serde(default)]
    pub interesting: Vec<String>,
}

/// Result record handed to the presenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResult {
    pub animal_name: String,
    pub animal_type: String,
    pub description: String,
    pub animal_description: String,
    #[serde(default)]
    pub analyze: Analysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_description: Option<String>,
}

/// Classify a finished answer set
pub fn classify(answer: &SurveyAnswer) -> AnimalResult {
    let archetype = Archetype::from_answer(answer);

    AnimalResult {
        animal_name: archetype.animal_name().to_string(),
        animal_type: archetype.animal_type().to_string(),
        description: archetype.description().to_string(),
        animal_description: archetype.animal_description().to_string(),
        analyze: Analysis {
            purpose: purpose_summary(answer),
            time_pattern: time_pattern(answer).to_string(),
            interesting: interesting(answer),
        },
        cluster_description: Some(cluster_description(answer)),
    }
}

/// Labels of the ranked activities: empties dropped, duplicates removed in
/// first-seen order, at most three
pub fn interesting(answer: &SurveyAnswer) -> Vec<String> {
    let mut labels: Vec<String> = Vec::with_capacity(MAX_INTERESTS);
    for activity in answer.activities() {
        if labels.len() == MAX_INTERESTS {
            break;
        }
        if !activity.is_some() {
            continue;
        }
        let label = activity.label();
        if !labels.iter().any(|seen| seen == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

/// Sentence describing the top-ranked activity, or a balanced message when
/// every slot is empty
pub fn cluster_description(answer: &SurveyAnswer) -> String {
    match top_activity(answer) {
        Some(activity) => format!(
            "당신의 유형은 다른 유형보다 '{}' 활동을 더 선호합니다.",
            activity.label()
        ),
        None => "당신의 유형은 특정 활동에 치우치지 않고 여러 여가활동을 고르게 즐깁니다."
            .to_string(),
    }
}

fn top_activity(answer: &SurveyAnswer) -> Option<LeisureActivity> {
    answer.activities().into_iter().find(|a| a.is_some())
}

fn purpose_summary(answer: &SurveyAnswer) -> String {
    format!(
        "1순위: {}, 2순위: {}",
        answer.leisure_purpose.label(),
        answer.leisure_purpose2.label()
    )
}

fn time_pattern(answer: &SurveyAnswer) -> &'static str {
    if answer.weekly_leisure_hours() > ACTIVE_WEEKLY_HOURS {
        "활동적"
    } else {
        "온건"
    }
}
