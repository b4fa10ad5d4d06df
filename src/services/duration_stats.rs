//! Total and mean trip duration.

use crate::error::BikeshareResult;
use crate::models::{FormattedDuration, Trip};

/// Aggregate duration figures for the filtered table. An empty table keeps
/// both durations at the zero sentinel alongside a count of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub trip_count: usize,
    /// Sum of all trip durations, days included in the rendering.
    pub total: FormattedDuration,
    /// Arithmetic mean, rendered clock-style via
    /// [`FormattedDuration::clock_display`].
    pub mean: FormattedDuration,
}

/// # Errors
/// Only fails if the data carries a negative duration, which is a contract
/// violation of the source table rather than an expected condition.
pub fn compute_duration_stats(trips: &[Trip]) -> BikeshareResult<DurationStats> {
    if trips.is_empty() {
        return Ok(DurationStats {
            trip_count: 0,
            total: FormattedDuration::Zero,
            mean: FormattedDuration::Zero,
        });
    }

    let total_seconds: f64 = trips.iter().map(|t| t.duration_seconds).sum();
    let mean_seconds = total_seconds / trips.len() as f64;

    Ok(DurationStats {
        trip_count: trips.len(),
        total: FormattedDuration::from_seconds(total_seconds)?,
        mean: FormattedDuration::from_seconds(mean_seconds)?,
    })
}
