//! Error types for catalog time parsing.

use thiserror::Error;

/// Errors produced while parsing time strings from catalog data.
///
/// These never escape the engine's public checks: the conflict detector and
/// the generators absorb them by skipping the affected comparison.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Text did not match the strict `HH:MM` clock shape
    #[error("Invalid clock time {input:?}, expected HH:MM")]
    InvalidClockTime { input: String },

    /// Text did not match `HH:MM-HH:MM`, or the range was empty/inverted
    #[error("Invalid time range {input:?}, expected HH:MM-HH:MM with end after start")]
    InvalidTimeRange { input: String },

    /// Composite exam text did not contain a date and a time range
    #[error("Invalid exam slot {input:?}, expected `<date> - HH:MM-HH:MM`")]
    InvalidExamSlot { input: String },
}

impl TimeParseError {
    /// Returns the offending input text.
    pub fn input(&self) -> &str {
        match self {
            TimeParseError::InvalidClockTime { input }
            | TimeParseError::InvalidTimeRange { input }
            | TimeParseError::InvalidExamSlot { input } => input,
        }
    }
}
