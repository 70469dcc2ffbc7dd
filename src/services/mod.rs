//! Services
//!
//! Session control, submission wiring and the presenter boundary.

pub mod presenter;
pub mod session;
pub mod submission;

pub use presenter::{Presenter, RecordingPresenter};
pub use session::SurveySession;
pub use submission::{build_submitter, SimulatedLatency};
