//! Admissibility checks for adding a candidate section to a selection.

use tracing::debug;

use super::time::{intervals_overlap, is_unscheduled_exam_time, parse_time_range};
use crate::types::{Conflict, ConflictKind, CourseSection, Session};

/// Decides whether adding `candidate` to `selection` introduces a clash.
///
/// Runs the time pass over every (existing-session, candidate-session) pair
/// sharing a day, then the exam pass, and short-circuits on the first hit.
/// Already-chosen sections are scanned in insertion order, so the reported
/// `conflicting_with` id is reproducible across calls.
///
/// Malformed data never blocks the check: sessions that cannot form a real
/// interval and exam text that does not parse only skip their own comparison.
///
/// # Returns
/// * `None` - the candidate is admissible
/// * `Some(Conflict)` - the kind of clash and the chosen section it hits
pub fn check_conflict(selection: &[CourseSection], candidate: &CourseSection) -> Option<Conflict> {
    let selection: Vec<&CourseSection> = selection.iter().collect();
    check_conflict_refs(&selection, candidate)
}

/// Borrow-friendly form used by the search loops, which accumulate `&CourseSection` paths.
pub(crate) fn check_conflict_refs(
    selection: &[&CourseSection],
    candidate: &CourseSection,
) -> Option<Conflict> {
    find_time_conflict(selection, candidate).or_else(|| find_exam_conflict(selection, candidate))
}

fn find_time_conflict(selection: &[&CourseSection], candidate: &CourseSection) -> Option<Conflict> {
    for chosen in selection {
        for existing in &chosen.sessions {
            for session in &candidate.sessions {
                if sessions_clash(existing, session) {
                    debug!(
                        "Time clash: section {} overlaps {} on day {}",
                        candidate.id, chosen.id, session.day
                    );
                    return Some(Conflict {
                        kind: ConflictKind::Time,
                        conflicting_with: chosen.id.clone(),
                    });
                }
            }
        }
    }
    None
}

/// Two sessions clash when they share a day, both are well formed, their
/// parities cannot alternate, and their minute intervals overlap.
fn sessions_clash(a: &Session, b: &Session) -> bool {
    if a.day != b.day {
        return false;
    }
    if !a.is_well_formed() || !b.is_well_formed() {
        return false;
    }
    if !a.week_type.conflicts_with(b.week_type) {
        return false;
    }
    intervals_overlap(
        a.start_minutes(),
        a.end_minutes(),
        b.start_minutes(),
        b.end_minutes(),
    )
}

/// Coarse exam clash: exact textual equality of date and time range.
///
/// Two exams on the same date with different but overlapping ranges are not
/// flagged; only identical text counts, and only when that text is a real
/// scheduled range (the unscheduled placeholder and unparseable text are
/// skipped).
fn find_exam_conflict(selection: &[&CourseSection], candidate: &CourseSection) -> Option<Conflict> {
    let (date, time) = match (&candidate.exam_date, &candidate.exam_time) {
        (Some(date), Some(time)) => (date.as_str(), time.as_str()),
        _ => return None,
    };
    if is_unscheduled_exam_time(time) || parse_time_range(time).is_err() {
        return None;
    }

    for chosen in selection {
        if chosen.exam_date.as_deref() == Some(date) && chosen.exam_time.as_deref() == Some(time) {
            debug!(
                "Exam clash: sections {} and {} both sit {} {}",
                candidate.id, chosen.id, date, time
            );
            return Some(Conflict {
                kind: ConflictKind::Exam,
                conflicting_with: chosen.id.clone(),
            });
        }
    }
    None
}
