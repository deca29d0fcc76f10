/// Types for course catalog and schedule data
use serde::{Deserialize, Serialize};

/// Weekly meeting parity of a session.
///
/// `Both` means the session meets every week; `Odd`/`Even` sessions meet only
/// on alternating calendar weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekType {
    Odd,
    Even,
    #[default]
    Both,
}

impl WeekType {
    /// Returns true when two sessions with these parities cannot share a time
    /// slot.
    ///
    /// Only the odd/even pairing is compatible (the sessions fall on different
    /// calendar weeks). `Both` conflicts with everything, including another
    /// `Both`, and identical concrete parities conflict with each other.
    pub fn conflicts_with(self, other: WeekType) -> bool {
        !matches!(
            (self, other),
            (WeekType::Odd, WeekType::Even) | (WeekType::Even, WeekType::Odd)
        )
    }
}

/// One recurring weekly time block of a course section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Day-of-week index, 0 = Saturday .. 5 = Thursday. Catalogs never
    /// schedule day 6 (Friday).
    pub day: u8,

    /// Start hour, whole hours (catalogs use 7..20)
    pub start_time: u32,

    /// End hour, strictly after `start_time` for well-formed data
    pub end_time: u32,

    /// Meets every week unless the catalog marked an odd/even parity
    #[serde(default)]
    pub week_type: WeekType,

    /// Free text, not used by conflict logic
    #[serde(default)]
    pub location: String,
}

impl Session {
    /// Start of the session in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start_time * 60
    }

    /// End of the session in minutes since midnight.
    pub fn end_minutes(&self) -> u32 {
        self.end_time * 60
    }

    /// A session whose hour bounds cannot form a real interval is skipped by
    /// conflict checks instead of aborting them.
    pub fn is_well_formed(&self) -> bool {
        self.end_time > self.start_time
    }
}

/// One concrete offering of a course: a specific instructor/time/group.
///
/// Sections sharing a `course_id` are interchangeable alternatives of the same
/// logical course, from which a student picks at most one. The catalog is
/// read-only input; the engine clones sections into results and never mutates
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSection {
    /// Unique, stable identifier of this specific section
    pub id: String,

    /// Logical course identity shared by interchangeable sections
    pub course_id: String,

    #[serde(default)]
    pub credits: f32,

    /// Zero or more weekly time blocks. A section with no sessions (thesis,
    /// internship) has no fixed slot and is exempt from time-conflict checks.
    #[serde(default)]
    pub sessions: Vec<Session>,

    /// Exam calendar date, e.g. "1404/11/06"; `None` when no exam is scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,

    /// Exam time range, e.g. "13:30-15:30"; `None` when no exam is scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_time: Option<String>,
}

/// What kind of clash blocks a candidate section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Time,
    Exam,
}

/// A detected clash between a candidate section and an already-chosen one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub kind: ConflictKind,
    /// `id` of the already-chosen section the candidate clashes with
    pub conflicting_with: String,
}

/// One full, conflict-free selection of sections with derived ranking metrics.
///
/// Produced by the combination generator; lower `score` is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCombination {
    /// Chosen sections, no two sharing a `course_id`
    pub courses: Vec<CourseSection>,

    /// Summed credits over `courses`
    pub total_units: f32,

    /// Count of distinct days touched by any session
    pub days_used: usize,

    /// Idle time in hours between same-day sessions, counting only gaps above
    /// the configured floor
    pub empty_hours: f64,

    /// Composite ranking value, lower is better
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_type_parity_matrix() {
        assert!(!WeekType::Odd.conflicts_with(WeekType::Even));
        assert!(!WeekType::Even.conflicts_with(WeekType::Odd));

        assert!(WeekType::Odd.conflicts_with(WeekType::Odd));
        assert!(WeekType::Even.conflicts_with(WeekType::Even));

        assert!(WeekType::Both.conflicts_with(WeekType::Both));
        assert!(WeekType::Both.conflicts_with(WeekType::Odd));
        assert!(WeekType::Both.conflicts_with(WeekType::Even));
        assert!(WeekType::Odd.conflicts_with(WeekType::Both));
        assert!(WeekType::Even.conflicts_with(WeekType::Both));
    }

    #[test]
    fn test_session_minutes() {
        let session = Session {
            day: 2,
            start_time: 8,
            end_time: 10,
            week_type: WeekType::Both,
            location: String::new(),
        };
        assert_eq!(session.start_minutes(), 480);
        assert_eq!(session.end_minutes(), 600);
        assert!(session.is_well_formed());
    }

    #[test]
    fn test_session_week_type_defaults_to_both() {
        let session: Session = serde_json::from_value(serde_json::json!({
            "day": 0,
            "startTime": 9,
            "endTime": 11
        }))
        .unwrap();
        assert_eq!(session.week_type, WeekType::Both);
        assert!(session.location.is_empty());
    }

    #[test]
    fn test_course_section_wire_shape() {
        let section: CourseSection = serde_json::from_value(serde_json::json!({
            "id": "1211_01",
            "courseId": "1211",
            "credits": 3.0,
            "sessions": [
                {"day": 0, "startTime": 8, "endTime": 10, "weekType": "odd"}
            ],
            "examDate": "1404/11/06",
            "examTime": "13:30-15:30"
        }))
        .unwrap();
        assert_eq!(section.course_id, "1211");
        assert_eq!(section.sessions[0].week_type, WeekType::Odd);
        assert_eq!(section.exam_time.as_deref(), Some("13:30-15:30"));
    }
}
