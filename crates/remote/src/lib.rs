//! Leisure Survey Remote
//!
//! Forwards finished survey payloads to a remote scoring endpoint over HTTP
//! and maps failures onto the core `Transport` error.

pub mod http_client;
pub mod submitter;

pub use http_client::build_http_client;
pub use submitter::{endpoint_url, parse_http_error, RemoteSubmitter};
