//! Data Models
//!
//! Configuration, command responses and presenter view models.

pub mod response;
pub mod settings;
pub mod view;

pub use response::*;
pub use settings::*;
pub use view::*;
