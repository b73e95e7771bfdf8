//! Database layer - connection pool, schema bootstrap, repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - The exercise log is embedded in the user row - no separate table, no JOINs
//! - Appends are single-statement - no read-modify-write on the log

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
