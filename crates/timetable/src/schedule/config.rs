//! Tuning knobs for combination scoring.

use serde::{Deserialize, Serialize};

/// Weights and thresholds applied when scoring schedule combinations.
///
/// The defaults reproduce the standard ranking: one point per active day,
/// half a point per idle hour, and gaps of 15 minutes or less ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Weight of each distinct day carrying at least one session
    pub day_weight: f64,

    /// Weight of each idle hour between same-day sessions
    pub gap_weight: f64,

    /// Same-day gaps must strictly exceed this many minutes to count as idle
    pub min_gap_minutes: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            day_weight: 1.0,
            gap_weight: 0.5,
            min_gap_minutes: 15,
        }
    }
}
