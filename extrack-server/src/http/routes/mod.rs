//! Route handlers organized by resource

pub mod exercise;
pub mod health;
