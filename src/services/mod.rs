//! Statistics routines over filtered trip tables, plus raw-row paging.
//!
//! Each routine is independent and total: an empty table yields "no data"
//! results rather than an error or a panic, and optional columns that carry
//! no values are reported as unavailable.

pub mod duration_stats;
pub mod pager;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;

pub use duration_stats::{compute_duration_stats, DurationStats};
pub use pager::{RawDataPager, DEFAULT_BATCH_SIZE};
pub use station_stats::{compute_station_stats, StationStats};
pub use time_stats::{compute_time_stats, TimeStats};
pub use user_stats::{compute_user_stats, BirthYearStats, UserStats};

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value with its occurrence count. Ties break to the value
/// seen first in table order, matching a stable "mode".
pub(crate) fn mode_with_count<T>(values: impl IntoIterator<Item = T>) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
{
    let items: Vec<T> = values.into_iter().collect();
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in &items {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&T, usize)> = None;
    for value in &items {
        let count = counts[value];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, count)| (value.clone(), count))
}

/// Frequency table ordered by descending count; equal counts keep
/// first-occurrence order.
pub(crate) fn frequency_table<T>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for value in values {
        let entry = counts.entry(value.clone()).or_insert(0);
        if *entry == 0 {
            order.push(value);
        }
        *entry += 1;
    }

    let mut table: Vec<(T, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode_with_count(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_first_occurrence_tie_break() {
        assert_eq!(mode_with_count(vec![3, 1, 1, 3]), Some((3, 2)));
        assert_eq!(mode_with_count(vec![1, 3, 3, 1]), Some((1, 2)));
    }

    #[test]
    fn test_frequency_table_ordering() {
        let table = frequency_table(vec!["b", "a", "a", "c", "b", "a"]);
        assert_eq!(table, vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_frequency_table_stable_on_ties() {
        let table = frequency_table(vec!["x", "y", "x", "y"]);
        assert_eq!(table, vec![("x", 2), ("y", 2)]);
    }
}
