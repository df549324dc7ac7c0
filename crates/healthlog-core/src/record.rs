//! The record model: one day's health measurements plus its date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Column header of the backing CSV file. Fixed at creation time; every
/// load verifies the file still carries exactly these names in this order.
pub const HEADER: [&str; 5] = [
    "date",
    "exercise_minutes",
    "water_liters",
    "sleep_hours",
    "calories",
];

/// The four numeric columns, in schema order.
pub const NUMERIC_FIELDS: [&str; 4] = [
    "exercise_minutes",
    "water_liters",
    "sleep_hours",
    "calories",
];

/// One logged observation.
///
/// One record per day is the intended usage, but same-date duplicates are
/// permitted and retained. Values are not range-checked; a negative number
/// that parses is stored and averaged as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub exercise_minutes: f64,
    pub water_liters: f64,
    pub sleep_hours: f64,
    pub calories: f64,
}

impl Record {
    pub fn new(
        date: NaiveDate,
        exercise_minutes: f64,
        water_liters: f64,
        sleep_hours: f64,
        calories: f64,
    ) -> Self {
        Self {
            date,
            exercise_minutes,
            water_liters,
            sleep_hours,
            calories,
        }
    }

    /// Build a record from raw text fields, as gathered by an interactive
    /// prompt. Each field must parse as a number; the first one that does
    /// not yields [`RecordError::InvalidField`] naming it, so the caller
    /// can re-prompt instead of writing a malformed row.
    pub fn from_fields(
        date: NaiveDate,
        exercise_minutes: &str,
        water_liters: &str,
        sleep_hours: &str,
        calories: &str,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            date,
            exercise_minutes: parse_field("exercise_minutes", exercise_minutes)?,
            water_liters: parse_field("water_liters", water_liters)?,
            sleep_hours: parse_field("sleep_hours", sleep_hours)?,
            calories: parse_field("calories", calories)?,
        })
    }

    /// The numeric fields paired with their schema names, in schema order.
    pub fn numeric_values(&self) -> [(&'static str, f64); 4] {
        [
            ("exercise_minutes", self.exercise_minutes),
            ("water_liters", self.water_liters),
            ("sleep_hours", self.sleep_hours),
            ("calories", self.calories),
        ]
    }
}

/// Parse one raw text field into a number.
///
/// # Errors
/// Returns [`RecordError::InvalidField`] naming `field` when `raw` does not
/// parse as a number.
pub fn parse_field(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RecordError::InvalidField {
            field,
            value: raw.trim().to_string(),
        })
}
