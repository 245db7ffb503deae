//! Validation layer for entity forms.
//!
//! Every form payload is checked field by field before it reaches a store
//! mutation. A failing form yields the full list of field errors; a passing
//! form yields a normalized record.

mod forms;

pub use forms::*;

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::parse_datetime;

/// Minimum CPF length (digits, optionally punctuated)
pub const MIN_CPF_LENGTH: usize = 11;
/// Minimum length for person names
pub const MIN_NAME_LENGTH: usize = 2;
/// Minimum length for doctor names
pub const MIN_DOCTOR_NAME_LENGTH: usize = 3;
/// Minimum length for city names
pub const MIN_CITY_LENGTH: usize = 2;
/// Minimum SUS card length
pub const MIN_SUS_CARD_LENGTH: usize = 15;
/// Minimum contact (phone) length
pub const MIN_CONTACT_LENGTH: usize = 10;
/// Minimum street address length
pub const MIN_ADDRESS_LENGTH: usize = 5;
/// Minimum medication name length
pub const MIN_MEDICATION_NAME_LENGTH: usize = 2;

/// Layout of normalized calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single failed field constraint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, uniffi::Record)]
pub struct FieldError {
    /// Field name as it appears in the form payload (e.g., "susCard")
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors found in one form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", join_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Check whether a given field failed.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Messages reported for a field.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Accumulates field errors for one form.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    pub(crate) fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Require at least `min` characters.
    pub(crate) fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.push(field, message);
        }
    }

    /// Require a non-empty value.
    pub(crate) fn non_empty(&mut self, field: &str, value: &str, message: &str) {
        self.min_len(field, value, 1, message);
    }

    /// Require a present, non-empty optional value and hand it back.
    pub(crate) fn required<'a>(
        &mut self,
        field: &str,
        value: Option<&'a str>,
        message: &str,
    ) -> Option<&'a str> {
        match value {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.push(field, message);
                None
            }
        }
    }

    /// Finish the form: build the output only if no field failed.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> T) -> ValidationResult<T> {
        if self.errors.is_empty() {
            Ok(build())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

/// Parse a calendar date from `YYYY-MM-DD`, a wall-clock timestamp or RFC 3339.
///
/// RFC 3339 timestamps are reduced to their UTC date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc().date())
        })
        .or_else(|| parse_datetime(value).map(|dt| dt.date()))
}

/// Parse a time of day from `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}
