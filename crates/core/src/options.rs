//! Survey Option Types
//!
//! Every categorical survey question is backed by a small enum with a fixed
//! integer wire code and a display label. The ordered `(value, label)` lists
//! are shared by the classifier and by whatever presenter renders the
//! buttons, so both always agree on the wording.

use serde::{Deserialize, Serialize};

use crate::error::SurveyError;

/// A single selectable option as handed to a presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    /// Wire code of the option
    pub value: u8,
    /// Display label
    pub label: &'static str,
}

macro_rules! survey_option {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Every variant in display order
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Integer code used on the wire
            pub fn code(self) -> u8 {
                self as u8
            }

            /// Display label for this option
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Parse from the wire code
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Ordered option list for rendering
            pub fn options() -> Vec<OptionItem> {
                Self::ALL
                    .iter()
                    .map(|v| OptionItem {
                        value: v.code(),
                        label: v.label(),
                    })
                    .collect()
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = SurveyError;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or_else(|| {
                    SurveyError::parse(format!("invalid {} code: {}", stringify!($name), code))
                })
            }
        }
    };
}

survey_option! {
    /// Monthly household income bracket
    pub enum HouseholdIncome {
        #[default]
        NoAnswer = 0 => "무응답",
        Under3M = 1 => "300만원 미만",
        From3To5M = 2 => "300 이상 500만원 미만",
        From5To7M = 3 => "500 이상 700만원 미만",
        Over7M = 4 => "700만원 이상",
    }
}

survey_option! {
    /// First-ranked purpose of leisure time (no "none" choice)
    pub enum LeisurePurpose {
        #[default]
        MindPeaceRest = 1 => "마음의 안정·휴식을 위해",
        KillTime = 2 => "남는 시간을 보내기 위해",
        FamilyFriends = 3 => "가족·지인 등과 시간을 보내기 위해",
        SelfSatisfaction = 4 => "자기만족·즐거움을 위해",
        SelfDevelopment = 5 => "자기 계발을 위해",
        StressRelief = 6 => "스트레스 해소를 위해",
        HealthCare = 7 => "건강 관리를 위해",
        SocialRelationship = 8 => "대인 관계·교제를 위해",
        Etc = 9 => "기타",
    }
}

survey_option! {
    /// Second-ranked purpose of leisure time
    pub enum LeisurePurpose2 {
        #[default]
        None = 0 => "없음",
        MindPeaceRest = 1 => "마음의 안정·휴식을 위해",
        KillTime = 2 => "남는 시간을 보내기 위해",
        FamilyFriends = 3 => "가족·지인 등과 시간을 보내기 위해",
        SelfSatisfaction = 4 => "자기만족·즐거움을 위해",
        SelfDevelopment = 5 => "자기 계발을 위해",
        StressRelief = 6 => "스트레스 해소를 위해",
        HealthCare = 7 => "건강 관리를 위해",
        SocialRelationship = 8 => "대인 관계·교제를 위해",
        Etc = 9 => "기타",
    }
}

survey_option! {
    /// Leisure activity category used by the five interest-rank slots
    pub enum LeisureActivity {
        #[default]
        None = 0 => "없음",
        MediaContent = 1 => "미디어/콘텐츠",
        Sports = 2 => "스포츠/운동",
        TravelOutdoor = 3 => "여행/야외활동",
        CultureArt = 4 => "문화/예술",
        SelfDevelopment = 5 => "자기계발",
        SocialFamily = 6 => "사교/가족",
        DailyRest = 7 => "일상/휴식",
        Etc = 8 => "기타",
    }
}

impl LeisureActivity {
    /// Whether this slot holds an actual activity
    pub fn is_some(self) -> bool {
        self != Self::None
    }

    /// Options for the first-rank question, which cannot be skipped
    pub fn required_options() -> Vec<OptionItem> {
        Self::options()
            .into_iter()
            .filter(|item| item.value != Self::None.code())
            .collect()
    }
}
