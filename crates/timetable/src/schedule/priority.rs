//! Schedule building that honors a student-supplied course ranking.
//!
//! Unlike the exhaustive combination search, these passes walk the candidate
//! list in the order given (highest priority first) and keep whatever fits,
//! trading global compactness for respecting the ranking.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::conflict::check_conflict_refs;
use super::config::SearchOptions;
use super::generator::{days_used, empty_hours};
use crate::types::CourseSection;

/// How a priority schedule was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleMethod {
    /// Straight greedy walk over the ranked list
    PriorityGreedy,
    /// Greedy walk that let the first `skipped` clashing sections pass
    SkipLowerPriority { skipped: usize },
}

/// A schedule built from a ranked course list, with the same idle-time and
/// day metrics as a generated combination.
///
/// Higher `score` is better here: the ranking axis is how many ranked
/// courses survived, not compactness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritySchedule {
    pub courses: Vec<CourseSection>,
    pub method: ScheduleMethod,
    pub score: f64,
    pub days_used: usize,
    pub empty_hours: f64,
}

/// Builds schedules respecting the priority order of `ordered` (highest
/// first), best score first.
///
/// The greedy pass admits every section that fits; alternative passes allow
/// a bounded number of clashing sections to be set aside before a second
/// fill over the remainder. Alternatives identical to an already-recorded
/// selection are not emitted.
pub fn generate_priority_schedules(ordered: &[CourseSection]) -> Vec<PrioritySchedule> {
    let mut schedules: Vec<PrioritySchedule> = Vec::new();

    let greedy = greedy_selection(ordered);
    if !greedy.is_empty() {
        let score = greedy.len() as f64 * 100.0;
        schedules.push(build_schedule(&greedy, ScheduleMethod::PriorityGreedy, score));
    }

    for skip_budget in 1..ordered.len().min(4) {
        let alternative = alternative_selection(ordered, skip_budget);
        if alternative.is_empty() {
            continue;
        }
        if schedules
            .iter()
            .any(|kept| same_selection(&kept.courses, &alternative))
        {
            continue;
        }
        let score = alternative.len() as f64 * 100.0 - skip_budget as f64 * 10.0;
        schedules.push(build_schedule(
            &alternative,
            ScheduleMethod::SkipLowerPriority {
                skipped: skip_budget,
            },
            score,
        ));
    }

    schedules.sort_by(|a, b| b.score.total_cmp(&a.score));

    info!(
        "Built {} priority schedules from {} ranked sections",
        schedules.len(),
        ordered.len()
    );

    schedules
}

/// A ranked section may join when its course is not taken yet and it passes
/// the conflict check against everything admitted so far.
fn admissible(selected: &[&CourseSection], section: &CourseSection) -> bool {
    if selected
        .iter()
        .any(|taken| taken.course_id == section.course_id)
    {
        return false;
    }
    check_conflict_refs(selected, section).is_none()
}

fn greedy_selection(ordered: &[CourseSection]) -> Vec<&CourseSection> {
    let mut selected: Vec<&CourseSection> = Vec::new();
    for section in ordered {
        if admissible(&selected, section) {
            selected.push(section);
        } else {
            debug!("Greedy pass drops {}", section.id);
        }
    }
    selected
}

fn alternative_selection(ordered: &[CourseSection], skip_budget: usize) -> Vec<&CourseSection> {
    let mut selected: Vec<&CourseSection> = Vec::new();
    let mut skipped: Vec<&CourseSection> = Vec::new();

    for section in ordered {
        if skipped.len() >= skip_budget {
            break;
        }
        if admissible(&selected, section) {
            selected.push(section);
        } else {
            skipped.push(section);
        }
    }

    // Second fill over the sections neither admitted nor set aside.
    for section in ordered {
        let seen = selected.iter().chain(skipped.iter()).any(|s| s.id == section.id);
        if !seen && admissible(&selected, section) {
            selected.push(section);
        }
    }

    selected
}

fn same_selection(kept: &[CourseSection], candidate: &[&CourseSection]) -> bool {
    kept.len() == candidate.len() && kept.iter().zip(candidate).all(|(a, b)| a.id == b.id)
}

fn build_schedule(
    chosen: &[&CourseSection],
    method: ScheduleMethod,
    score: f64,
) -> PrioritySchedule {
    PrioritySchedule {
        courses: chosen.iter().map(|section| (*section).clone()).collect(),
        method,
        score,
        days_used: days_used(chosen),
        empty_hours: empty_hours(chosen, SearchOptions::default().min_gap_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Session, WeekType};

    fn session(day: u8, start: u32, end: u32) -> Session {
        Session {
            day,
            start_time: start,
            end_time: end,
            week_type: WeekType::Both,
            location: String::new(),
        }
    }

    fn section(id: &str, course_id: &str, sessions: Vec<Session>) -> CourseSection {
        CourseSection {
            id: id.to_string(),
            course_id: course_id.to_string(),
            credits: 3.0,
            sessions,
            exam_date: None,
            exam_time: None,
        }
    }

    fn ids(schedule: &PrioritySchedule) -> Vec<&str> {
        schedule.courses.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_builds_nothing() {
        assert!(generate_priority_schedules(&[]).is_empty());
    }

    #[test]
    fn test_greedy_keeps_priority_order_and_drops_clashes() {
        let ranked = vec![
            section("p1", "A", vec![session(0, 8, 10)]),
            section("p2", "B", vec![session(0, 9, 11)]),
            section("p3", "C", vec![session(1, 8, 10)]),
        ];

        let schedules = generate_priority_schedules(&ranked);
        assert!(!schedules.is_empty());

        let greedy = &schedules[0];
        assert_eq!(greedy.method, ScheduleMethod::PriorityGreedy);
        assert_eq!(ids(greedy), ["p1", "p3"]);
        assert_eq!(greedy.score, 200.0);
        assert_eq!(greedy.days_used, 2);
    }

    #[test]
    fn test_conflict_free_ranking_admits_everything() {
        let ranked = vec![
            section("p1", "A", vec![session(0, 8, 10)]),
            section("p2", "B", vec![session(1, 8, 10)]),
            section("p3", "C", vec![session(2, 8, 10)]),
        ];

        let schedules = generate_priority_schedules(&ranked);
        assert_eq!(schedules.len(), 1);
        assert_eq!(ids(&schedules[0]), ["p1", "p2", "p3"]);
        assert_eq!(schedules[0].score, 300.0);
    }

    #[test]
    fn test_duplicate_course_is_not_admitted_twice() {
        let ranked = vec![
            section("a1", "A", vec![session(0, 8, 10)]),
            section("a2", "A", vec![session(1, 8, 10)]),
            section("b1", "B", vec![session(2, 8, 10)]),
        ];

        let schedules = generate_priority_schedules(&ranked);
        let greedy = &schedules[0];
        assert_eq!(ids(greedy), ["a1", "b1"]);
    }

    #[test]
    fn test_alternatives_matching_greedy_are_suppressed() {
        // The skip passes set aside the same clashing sections the greedy
        // pass drops, so their selections collapse into the greedy one.
        let ranked = vec![
            section("p1", "A", vec![session(0, 8, 10)]),
            section("p2", "B", vec![session(0, 9, 11)]),
            section("p3", "C", vec![session(0, 10, 12)]),
            section("p4", "D", vec![session(1, 8, 10)]),
        ];

        let schedules = generate_priority_schedules(&ranked);
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].method, ScheduleMethod::PriorityGreedy);
        assert_eq!(ids(&schedules[0]), ["p1", "p3", "p4"]);
    }

    #[test]
    fn test_schedules_sort_by_score_descending() {
        let ranked = vec![
            section("p1", "A", vec![session(0, 8, 10)]),
            section("p2", "B", vec![session(1, 8, 10)]),
        ];

        let schedules = generate_priority_schedules(&ranked);
        for pair in schedules.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_metrics_match_combination_semantics() {
        let ranked = vec![
            section("p1", "A", vec![session(0, 8, 10)]),
            section("p2", "B", vec![session(0, 12, 14)]),
        ];

        let schedules = generate_priority_schedules(&ranked);
        let greedy = &schedules[0];
        assert_eq!(greedy.days_used, 1);
        assert_eq!(greedy.empty_hours, 2.0);
    }
}
