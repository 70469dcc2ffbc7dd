//! Storage Layer
//!
//! Startup configuration loading. Survey answers and results are never
//! persisted.

pub mod config;

pub use config::*;
