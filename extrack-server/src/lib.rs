//! extrack-server: HTTP service for user exercise logs
//!
//! Users are created, exercises are appended to their embedded log, and
//! the log is read back with a count. Layout:
//!
//! - [`models`] - validated wire-level types
//! - [`db`] - PostgreSQL pool, schema bootstrap, repositories
//! - [`http`] - axum router, handlers, error mapping

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
