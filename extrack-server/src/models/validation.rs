//! Validation error types

use std::fmt;

/// Validation error for wire-level input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent or empty
    Missing { field: &'static str },

    /// Field doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Field could not be parsed as a number
    NotANumber { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::NotANumber { field } => write!(f, "{} must be a number", field),
        }
    }
}

impl std::error::Error for ValidationError {}
