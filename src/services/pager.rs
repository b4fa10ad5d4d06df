//! Raw-data paging: fixed-size row batches in table order.

use crate::error::{BikeshareError, BikeshareResult};
use crate::models::Trip;

/// Batch size used by the interactive raw-data prompt.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Yields the filtered table in fixed-size batches, preserving row order,
/// with the final batch possibly shorter. The sequence is recomputed on
/// every [`batches`](RawDataPager::batches) call, so a consumer that stops
/// early can start over; the table itself is never touched.
#[derive(Debug)]
pub struct RawDataPager<'a> {
    trips: &'a [Trip],
    batch_size: usize,
}

impl<'a> RawDataPager<'a> {
    /// # Errors
    /// Returns [`BikeshareError::InvalidInput`] for a zero batch size.
    pub fn new(trips: &'a [Trip], batch_size: usize) -> BikeshareResult<Self> {
        if batch_size == 0 {
            return Err(BikeshareError::InvalidInput(
                "batch size must be at least 1".to_string(),
            ));
        }
        Ok(Self { trips, batch_size })
    }

    /// A fresh iterator over the row batches.
    pub fn batches(&self) -> impl Iterator<Item = &'a [Trip]> + '_ {
        self.trips.chunks(self.batch_size)
    }

    /// Number of batches the table divides into.
    pub fn batch_count(&self) -> usize {
        self.trips.len().div_ceil(self.batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTrip;

    fn trips(n: usize) -> Vec<Trip> {
        (0..n)
            .map(|i| {
                Trip::from_raw(
                    RawTrip {
                        start_time: "2017-01-01 00:00:00".to_string(),
                        end_time: None,
                        trip_duration: 60.0,
                        start_station: format!("S{}", i),
                        end_station: "B".to_string(),
                        user_type: None,
                        gender: None,
                        birth_year: None,
                    },
                    i,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let table = trips(1);
        assert!(RawDataPager::new(&table, 0).is_err());
    }

    #[test]
    fn test_batch_sizes_and_order() {
        let table = trips(12);
        let pager = RawDataPager::new(&table, 5).unwrap();

        let batches: Vec<&[Trip]> = pager.batches().collect();
        assert_eq!(
            batches.iter().map(|b| b.len()).collect::<Vec<_>>(),
            vec![5, 5, 2]
        );
        assert_eq!(pager.batch_count(), 3);

        // All 12 rows covered once, in original order.
        let stations: Vec<&str> = batches
            .iter()
            .flat_map(|b| b.iter().map(|t| t.start_station.as_str()))
            .collect();
        let expected: Vec<String> = (0..12).map(|i| format!("S{}", i)).collect();
        assert_eq!(stations, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_restartable_per_call() {
        let table = trips(7);
        let pager = RawDataPager::new(&table, 5).unwrap();

        let first: Vec<usize> = pager.batches().map(|b| b.len()).collect();
        let second: Vec<usize> = pager.batches().map(|b| b.len()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_yields_no_batches() {
        let table = trips(0);
        let pager = RawDataPager::new(&table, DEFAULT_BATCH_SIZE).unwrap();
        assert_eq!(pager.batches().count(), 0);
        assert_eq!(pager.batch_count(), 0);
    }
}
