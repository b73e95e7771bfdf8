//! Domain models with validation at construction
//!
//! Raw wire fields are converted into these types before any database
//! access. Invalid input returns ValidationError, not panic.

pub mod exercise;
pub mod validation;

pub use exercise::{DurationMinutes, Exercise, ExerciseDate};
pub use validation::ValidationError;
