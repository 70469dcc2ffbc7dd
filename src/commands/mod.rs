//! Survey Commands
//!
//! Command handlers a presenter calls for user actions.

pub mod survey;

pub use survey::*;
