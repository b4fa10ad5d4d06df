//! Most frequent times of travel.

use crate::models::Trip;
use crate::services::mode_with_count;

/// Most frequent month (1-12), weekday (0=Mon..6=Sun), and start hour
/// (0-23), each paired with its trip count. `None` on an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<(u32, usize)>,
    pub weekday: Option<(u32, usize)>,
    pub hour: Option<(u32, usize)>,
}

pub fn compute_time_stats(trips: &[Trip]) -> TimeStats {
    TimeStats {
        month: mode_with_count(trips.iter().map(|t| t.month)),
        weekday: mode_with_count(trips.iter().map(|t| t.weekday)),
        hour: mode_with_count(trips.iter().map(|t| t.hour)),
    }
}
