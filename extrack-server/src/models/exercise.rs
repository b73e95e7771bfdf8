//! Exercise value type and the typed boundary for its wire fields
//!
//! Callers submit `duration` and `date` as raw form strings. They are
//! converted here, before the db layer sees them, so malformed input
//! surfaces as a ValidationError rather than a store fault.

use std::fmt;

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::ValidationError;

/// Date shape: exactly YYYY-MM-DD, zero-padded
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid date regex"));

/// One logged activity entry, embedded in a user's log.
///
/// Exercises have no identity of their own; they live and die with the
/// owning user and are never mutated after append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    pub duration: Number,
    pub date: String,
}

impl Exercise {
    pub fn new(description: String, duration: DurationMinutes, date: ExerciseDate) -> Self {
        Self {
            description,
            duration: duration.into_number(),
            date: date.to_string(),
        }
    }
}

/// Validated exercise date (calendar date in YYYY-MM-DD form)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Parse a caller-supplied date string.
    ///
    /// # Rules
    /// - Exactly `YYYY-MM-DD` (zero-padded)
    /// - Must be a real calendar date
    ///
    /// # Example
    /// ```
    /// use extrack_server::models::ExerciseDate;
    ///
    /// assert!(ExerciseDate::parse("2024-01-31").is_ok());
    /// assert!(ExerciseDate::parse("2024-1-31").is_err());   // not zero-padded
    /// assert!(ExerciseDate::parse("2024-02-30").is_err());  // no such day
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Missing { field: "date" });
        }

        let invalid = ValidationError::InvalidFormat {
            field: "date",
            reason: "must be a calendar date in YYYY-MM-DD form",
        };

        if !DATE_RE.is_match(s) {
            return Err(invalid);
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid)?;
        Ok(Self(date))
    }

    /// Current date on the service clock (UTC), the default when the
    /// caller omits the field.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Validated exercise duration in minutes.
///
/// Any finite number is accepted; the range is deliberately unchecked.
/// Integral input stays integral on the wire (30 echoes back as 30,
/// not 30.0), so the value is kept as a JSON number rather than f64.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationMinutes(Number);

impl DurationMinutes {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: "duration" });
        }

        if let Ok(minutes) = trimmed.parse::<i64>() {
            return Ok(Self(Number::from(minutes)));
        }

        let minutes: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::NotANumber { field: "duration" })?;

        // from_f64 rejects NaN and infinities
        Number::from_f64(minutes)
            .map(Self)
            .ok_or(ValidationError::NotANumber { field: "duration" })
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn into_number(self) -> Number {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dates() {
        assert!(ExerciseDate::parse("2024-01-01").is_ok());
        assert!(ExerciseDate::parse("1999-12-31").is_ok());
        assert!(ExerciseDate::parse("2024-02-29").is_ok()); // leap day
    }

    #[test]
    fn rejects_unpadded_date() {
        let err = ExerciseDate::parse("2024-1-1").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_impossible_date() {
        let err = ExerciseDate::parse("2024-02-30").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_garbage_date() {
        let err = ExerciseDate::parse("next tuesday").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn empty_date_is_missing() {
        let err = ExerciseDate::parse("").unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "date" }));
    }

    #[test]
    fn date_round_trips_through_display() {
        let date = ExerciseDate::parse("2024-01-05").unwrap();
        assert_eq!(date.to_string(), "2024-01-05");
    }

    #[test]
    fn today_has_wire_shape() {
        let today = ExerciseDate::today().to_string();
        assert_eq!(today.len(), 10);
        assert!(ExerciseDate::parse(&today).is_ok());
    }

    #[test]
    fn valid_durations() {
        assert_eq!(DurationMinutes::parse("30").unwrap().as_f64(), Some(30.0));
        assert_eq!(DurationMinutes::parse("12.5").unwrap().as_f64(), Some(12.5));
        // Range is not validated
        assert_eq!(DurationMinutes::parse("-5").unwrap().as_f64(), Some(-5.0));
        assert_eq!(DurationMinutes::parse(" 45 ").unwrap().as_f64(), Some(45.0));
    }

    #[test]
    fn integral_duration_stays_integral() {
        let duration = DurationMinutes::parse("30").unwrap().into_number();
        assert_eq!(serde_json::to_string(&duration).unwrap(), "30");

        let duration = DurationMinutes::parse("12.5").unwrap().into_number();
        assert_eq!(serde_json::to_string(&duration).unwrap(), "12.5");
    }

    #[test]
    fn rejects_non_numeric_duration() {
        let err = DurationMinutes::parse("thirty").unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { .. }));
    }

    #[test]
    fn rejects_nan_duration() {
        let err = DurationMinutes::parse("NaN").unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { .. }));
    }

    #[test]
    fn empty_duration_is_missing() {
        let err = DurationMinutes::parse("").unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "duration" }));
    }

    #[test]
    fn exercise_assembles_wire_fields() {
        let ex = Exercise::new(
            "run".into(),
            DurationMinutes::parse("30").unwrap(),
            ExerciseDate::parse("2024-01-01").unwrap(),
        );
        assert_eq!(ex.description, "run");
        assert_eq!(ex.duration, Number::from(30));
        assert_eq!(ex.date, "2024-01-01");
    }
}
