//! Conflict detection and combinatorial schedule generation for weekly
//! course timetables.
//!
//! A catalog supplies [`CourseSection`] records: concrete offerings of
//! logical courses, each with recurring weekly [`Session`] blocks that may
//! meet every week or on alternating odd/even weeks. This crate decides
//! whether sections can coexist on one timetable ([`check_conflict`]) and
//! searches the space of one-section-per-course selections for ranked,
//! conflict-free schedules ([`generate_best_combinations`],
//! [`generate_priority_schedules`]).
//!
//! The engine is a pure, synchronous computation: no I/O, no globals, no
//! shared state between calls. Malformed catalog data (bad clock strings,
//! inverted hour ranges, placeholder exam slots) degrades gracefully by
//! skipping the affected comparison instead of failing the call.
//!
//! ```
//! use timetable::{check_conflict, generate_best_combinations};
//! use timetable::{CourseSection, Session, WeekType};
//!
//! let algebra = CourseSection {
//!     id: "1211_01".into(),
//!     course_id: "1211".into(),
//!     credits: 3.0,
//!     sessions: vec![Session {
//!         day: 0,
//!         start_time: 8,
//!         end_time: 10,
//!         week_type: WeekType::Both,
//!         location: String::new(),
//!     }],
//!     exam_date: None,
//!     exam_time: None,
//! };
//!
//! let combos = generate_best_combinations(std::slice::from_ref(&algebra), 10);
//! assert_eq!(combos.len(), 1);
//!
//! // The section clashes with itself: same day, same hours, every week.
//! assert!(check_conflict(&combos[0].courses, &algebra).is_some());
//! ```

pub mod schedule;
pub mod types;

pub use schedule::{
    check_conflict, generate_best_combinations, generate_priority_schedules,
    CombinationGenerator, PrioritySchedule, ScheduleMethod, SearchOptions, TimeParseError,
};
pub use types::{
    Conflict, ConflictKind, CourseSection, ScheduleCombination, Session, WeekType,
};
