//! Time parsing and interval helpers for schedule data.

use regex::Regex;
use std::sync::LazyLock;

use super::error::TimeParseError;

// Static patterns - compiled once
static CLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").unwrap());
static EXAM_SLOT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4}/\d{2}/\d{2}).*?(\d{1,2}:\d{2})-(\d{1,2}:\d{2})").unwrap());

/// Exam slot text shown by Golestan before a slot has been announced.
///
/// An announced-later exam must never ground an exam conflict, even when two
/// sections carry the identical placeholder.
pub const EXAM_TIME_UNSCHEDULED: &str = "اعلام نشده";

/// Parses a strict `HH:MM` clock string into minutes since midnight.
///
/// Hours are 0-23 (one or two digits), minutes exactly two digits 00-59.
/// Anything else is an error value so callers can skip the comparison that
/// needed it; nothing here panics.
pub fn time_to_minutes(text: &str) -> Result<u32, TimeParseError> {
    let invalid = || TimeParseError::InvalidClockTime {
        input: text.to_string(),
    };

    let caps = CLOCK_REGEX.captures(text.trim()).ok_or_else(invalid)?;
    let hours: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minutes: u32 = caps[2].parse().map_err(|_| invalid())?;
    Ok(hours * 60 + minutes)
}

/// Half-open interval overlap test.
///
/// Touching intervals (`end1 == start2`) do not overlap.
pub fn intervals_overlap(start1: u32, end1: u32, start2: u32, end2: u32) -> bool {
    start1 < end2 && start2 < end1
}

/// Parses `HH:MM-HH:MM` into a (start, end) minute pair, end strictly after
/// start.
pub fn parse_time_range(text: &str) -> Result<(u32, u32), TimeParseError> {
    let invalid = || TimeParseError::InvalidTimeRange {
        input: text.to_string(),
    };

    let (start_text, end_text) = text.trim().split_once('-').ok_or_else(invalid)?;
    let start = time_to_minutes(start_text).map_err(|_| invalid())?;
    let end = time_to_minutes(end_text).map_err(|_| invalid())?;
    if end > start {
        Ok((start, end))
    } else {
        Err(invalid())
    }
}

/// A parsed exam slot: an opaque calendar date plus a minute range.
///
/// Dates are Solar Hijri strings ("1404/11/06") and are compared textually,
/// never interpreted as calendar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamSlot {
    pub date: String,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

/// Extracts the date and time range from composite exam text of the form
/// `"<date> - HH:MM-HH:MM"`.
///
/// Fails when the pattern does not match or the parsed end is not strictly
/// after the parsed start.
pub fn parse_exam_slot(text: &str) -> Result<ExamSlot, TimeParseError> {
    let invalid = || TimeParseError::InvalidExamSlot {
        input: text.to_string(),
    };

    let caps = EXAM_SLOT_REGEX.captures(text).ok_or_else(invalid)?;
    let start_minutes = time_to_minutes(&caps[2]).map_err(|_| invalid())?;
    let end_minutes = time_to_minutes(&caps[3]).map_err(|_| invalid())?;
    if end_minutes <= start_minutes {
        return Err(invalid());
    }

    Ok(ExamSlot {
        date: caps[1].to_string(),
        start_minutes,
        end_minutes,
    })
}

/// Returns true for exam-time text that stands for "no slot announced yet":
/// blank text or the Golestan placeholder literal.
pub fn is_unscheduled_exam_time(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == EXAM_TIME_UNSCHEDULED
}
