//! Most popular stations and station pairs.

use crate::models::Trip;
use crate::services::mode_with_count;

/// Most frequent start station, end station, and (start, end) pair, each
/// with its trip count. `None` on an empty table.
///
/// The pair is keyed as a tuple of the two station names, so no delimiter
/// has to be reserved out of the station-name alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: Option<(String, usize)>,
    pub end: Option<(String, usize)>,
    pub trip: Option<((String, String), usize)>,
}

pub fn compute_station_stats(trips: &[Trip]) -> StationStats {
    StationStats {
        start: mode_with_count(trips.iter().map(|t| t.start_station.clone())),
        end: mode_with_count(trips.iter().map(|t| t.end_station.clone())),
        trip: mode_with_count(
            trips
                .iter()
                .map(|t| (t.start_station.clone(), t.end_station.clone())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTrip;

    fn trip(start: &str, end: &str) -> Trip {
        Trip::from_raw(
            RawTrip {
                start_time: "2017-03-01 10:00:00".to_string(),
                end_time: None,
                trip_duration: 60.0,
                start_station: start.to_string(),
                end_station: end.to_string(),
                user_type: None,
                gender: None,
                birth_year: None,
            },
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_table_reports_no_data() {
        let stats = compute_station_stats(&[]);
        assert_eq!(stats.start, None);
        assert_eq!(stats.end, None);
        assert_eq!(stats.trip, None);
    }

    #[test]
    fn test_popular_stations_and_pair() {
        let trips = vec![
            trip("Canal St", "State St"),
            trip("Canal St", "State St"),
            trip("Canal St", "Clark St"),
            trip("Clark St", "State St"),
        ];
        let stats = compute_station_stats(&trips);
        assert_eq!(stats.start, Some(("Canal St".to_string(), 3)));
        assert_eq!(stats.end, Some(("State St".to_string(), 3)));
        assert_eq!(
            stats.trip,
            Some((("Canal St".to_string(), "State St".to_string()), 2))
        );
    }

    #[test]
    fn test_pair_not_confused_by_similar_names() {
        // "A B" -> "C" and "A" -> "B C" must stay distinct pairs.
        let trips = vec![trip("A B", "C"), trip("A", "B C")];
        let stats = compute_station_stats(&trips);
        assert_eq!(stats.trip.unwrap().1, 1);
    }
}
