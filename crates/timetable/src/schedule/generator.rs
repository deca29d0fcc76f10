//! Backtracking search for ranked, conflict-free schedule combinations.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use super::conflict::check_conflict_refs;
use super::config::SearchOptions;
use crate::types::{CourseSection, ScheduleCombination};

/// Enumerates conflict-free selections of at most one section per logical
/// course and ranks them by compactness.
///
/// The search is exhaustive with early pruning: a branch is abandoned the
/// moment a candidate section clashes with the path built so far, so no
/// conflicting combination is ever materialized. Worst-case branching is the
/// product of (alternatives + 1) over all course groups; the result cap is
/// the only hard bound on work and is enforced inside the recursion, not by
/// truncating afterwards.
pub struct CombinationGenerator {
    options: SearchOptions,
}

impl CombinationGenerator {
    /// Creates a generator with the given scoring options.
    pub fn new(options: SearchOptions) -> Self {
        CombinationGenerator { options }
    }

    /// Returns the scoring options in use.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Generates up to `max_results` conflict-free combinations, best first.
    ///
    /// Candidates are grouped by `course_id` in order of first appearance;
    /// within a group, input order is kept. The whole pipeline is
    /// deterministic: the same input always yields the same ordered output.
    ///
    /// # Arguments
    /// * `candidates` - the pool of sections, possibly many per `course_id`
    /// * `max_results` - hard cap on kept combinations; 0 skips the search
    ///
    /// # Returns
    /// Combinations sorted by days used, then idle hours, then total units
    /// descending (heavier loads win ties). Never includes the empty
    /// combination, two sections of one course, or any pairwise clash.
    pub fn generate(
        &self,
        candidates: &[CourseSection],
        max_results: usize,
    ) -> Vec<ScheduleCombination> {
        if max_results == 0 || candidates.is_empty() {
            return Vec::new();
        }

        let groups = partition_by_course(candidates);
        let mut search = Search {
            groups: &groups,
            max_results,
            found: Vec::new(),
        };
        search.descend(0, &mut Vec::new());

        let mut combinations: Vec<ScheduleCombination> = search
            .found
            .iter()
            .map(|chosen| self.build_combination(chosen))
            .collect();
        combinations.sort_by(|a, b| {
            a.days_used
                .cmp(&b.days_used)
                .then_with(|| a.empty_hours.total_cmp(&b.empty_hours))
                .then_with(|| b.total_units.total_cmp(&a.total_units))
        });

        info!(
            "Kept {} conflict-free combinations across {} course groups",
            combinations.len(),
            groups.len()
        );

        combinations
    }

    fn build_combination(&self, chosen: &[&CourseSection]) -> ScheduleCombination {
        let days_used = days_used(chosen);
        let empty_hours = empty_hours(chosen, self.options.min_gap_minutes);
        ScheduleCombination {
            courses: chosen.iter().map(|section| (*section).clone()).collect(),
            total_units: chosen.iter().map(|section| section.credits).sum(),
            days_used,
            empty_hours,
            score: self.options.day_weight * days_used as f64
                + self.options.gap_weight * empty_hours,
        }
    }
}

impl Default for CombinationGenerator {
    fn default() -> Self {
        CombinationGenerator::new(SearchOptions::default())
    }
}

/// Generates up to `max_results` combinations with the standard scoring.
///
/// See [`CombinationGenerator::generate`].
pub fn generate_best_combinations(
    candidates: &[CourseSection],
    max_results: usize,
) -> Vec<ScheduleCombination> {
    CombinationGenerator::default().generate(candidates, max_results)
}

/// Groups candidates by `course_id`, groups ordered by first appearance.
fn partition_by_course(candidates: &[CourseSection]) -> Vec<Vec<&CourseSection>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&CourseSection>> = Vec::new();
    for section in candidates {
        match index.get(section.course_id.as_str()) {
            Some(&at) => groups[at].push(section),
            None => {
                index.insert(&section.course_id, groups.len());
                groups.push(vec![section]);
            }
        }
    }
    groups
}

struct Search<'a, 'g> {
    groups: &'g [Vec<&'a CourseSection>],
    max_results: usize,
    found: Vec<Vec<&'a CourseSection>>,
}

impl<'a> Search<'a, '_> {
    /// Depth-first walk: at each group, try every alternative that fits the
    /// accumulated path, then the skip branch. Trying alternatives first
    /// means covering combinations are discovered before the partial ones
    /// they dominate, so the result budget is spent on survivors.
    fn descend(&mut self, group: usize, chosen: &mut Vec<&'a CourseSection>) {
        if self.found.len() >= self.max_results {
            return;
        }
        let groups = self.groups;
        if group == groups.len() {
            self.record(chosen);
            return;
        }

        for &section in &groups[group] {
            if check_conflict_refs(chosen, section).is_some() {
                continue;
            }
            chosen.push(section);
            self.descend(group + 1, chosen);
            chosen.pop();
            if self.found.len() >= self.max_results {
                return;
            }
        }

        // Skip branch: the group contributes nothing on this path.
        self.descend(group + 1, chosen);
    }

    /// Keeps a completed selection unless an existing result already covers
    /// its course set; a kept selection evicts the strict subsets it covers.
    /// Equal course sets deduplicate first-found-first-kept.
    fn record(&mut self, chosen: &[&'a CourseSection]) {
        if chosen.is_empty() {
            return;
        }
        if self.found.iter().any(|kept| is_course_subset(chosen, kept)) {
            return;
        }
        self.found.retain(|kept| !is_course_subset(kept, chosen));
        self.found.push(chosen.to_vec());
        if self.found.len() == self.max_results {
            debug!(
                "Result cap {} reached, abandoning remaining branches",
                self.max_results
            );
        }
    }
}

/// True when every course id in `inner` also appears in `outer`.
fn is_course_subset(inner: &[&CourseSection], outer: &[&CourseSection]) -> bool {
    inner
        .iter()
        .all(|a| outer.iter().any(|b| b.course_id == a.course_id))
}

/// Count of distinct days touched by any session of the chosen sections.
pub(crate) fn days_used(chosen: &[&CourseSection]) -> usize {
    let mut days: Vec<u8> = chosen
        .iter()
        .flat_map(|section| section.sessions.iter().map(|session| session.day))
        .collect();
    days.sort_unstable();
    days.dedup();
    days.len()
}

/// Total idle hours between consecutive same-day sessions, counting only gaps
/// strictly greater than `min_gap_minutes`.
pub(crate) fn empty_hours(chosen: &[&CourseSection], min_gap_minutes: u32) -> f64 {
    let mut per_day: BTreeMap<u8, Vec<(u32, u32)>> = BTreeMap::new();
    for section in chosen {
        for session in &section.sessions {
            per_day
                .entry(session.day)
                .or_default()
                .push((session.start_minutes(), session.end_minutes()));
        }
    }

    let mut idle = 0.0;
    for intervals in per_day.values_mut() {
        intervals.sort_unstable();
        for pair in intervals.windows(2) {
            let gap = pair[1].0 as i64 - pair[0].1 as i64;
            if gap > min_gap_minutes as i64 {
                idle += gap as f64 / 60.0;
            }
        }
    }
    idle
}
