//! Leisure Survey Core
//!
//! Answer types, the survey state machine, the reference classifier and the
//! submission boundary trait. This crate has no dependency on any presenter,
//! async runtime or HTTP stack.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`SurveyError`, `SurveyResult`)
//! - `options` - Categorical option enums and their display labels
//! - `answer` - The answer set (`SurveyAnswer`) and field selectors
//! - `machine` - Ten-step survey state machine (`SurveyMachine`)
//! - `classifier` - Deterministic archetype classifier (`classify`)
//! - `submitter` - Submission boundary trait and the local implementation

pub mod answer;
pub mod classifier;
pub mod error;
pub mod machine;
pub mod options;
pub mod submitter;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{SurveyError, SurveyResult};

// ── Answers & Options ──────────────────────────────────────────────────
pub use answer::{ActivityRank, Choice, NumericField, SurveyAnswer};
pub use options::{HouseholdIncome, LeisureActivity, LeisurePurpose, LeisurePurpose2, OptionItem};

// ── State Machine ──────────────────────────────────────────────────────
pub use machine::{FieldValidity, SurveyMachine, SurveyStep, LAST_STEP, STEP_COUNT};

// ── Classification ─────────────────────────────────────────────────────
pub use classifier::{classify, Analysis, AnimalResult, Archetype};
pub use submitter::{LocalClassifier, SurveySubmitter};
