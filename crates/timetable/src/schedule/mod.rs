/// Conflict detection and schedule generation
///
/// The pipeline is strictly layered: time/parity utilities feed the conflict
/// detector, which feeds the combination generator and the priority planner.
/// Everything is synchronous and side-effect-free; callers own the catalog
/// and pass it in as arguments.
mod conflict;
mod config;
mod error;
mod generator;
mod priority;
mod time;

pub use conflict::check_conflict;
pub use config::SearchOptions;
pub use error::TimeParseError;
pub use generator::{generate_best_combinations, CombinationGenerator};
pub use priority::{generate_priority_schedules, PrioritySchedule, ScheduleMethod};
pub use time::{
    intervals_overlap, is_unscheduled_exam_time, parse_exam_slot, parse_time_range,
    time_to_minutes, ExamSlot, EXAM_TIME_UNSCHEDULED,
};
