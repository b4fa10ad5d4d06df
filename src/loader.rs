//! Dataset loading: CSV read, time-column derivation, filter application.

use std::path::Path;

use tracing::info;

use crate::config::CityConfig;
use crate::error::{BikeshareError, BikeshareResult};
use crate::models::{FilterSpec, RawTrip, Trip};

/// Loads a city's trip table and applies the resolved filters.
///
/// The configuration is injected once at startup; the loader owns no other
/// state and reads each file fresh per call.
pub struct TripLoader {
    config: CityConfig,
}

impl TripLoader {
    pub fn new(config: CityConfig) -> Self {
        Self { config }
    }

    /// Load the city's table, derive hour/month/weekday from the start
    /// timestamp, then apply the month and day filters in sequence (AND
    /// semantics when both are set).
    ///
    /// # Errors
    /// - [`BikeshareError::DataSourceNotFound`] when the backing file is
    ///   missing
    /// - [`BikeshareError::DataFormat`] when a start timestamp cannot be
    ///   parsed
    /// - [`BikeshareError::Csv`] when a row is structurally malformed
    pub fn load(&self, spec: &FilterSpec) -> BikeshareResult<Vec<Trip>> {
        let path = self.config.source_for(spec.city)?;
        let trips = self.read_city_file(path, spec)?;

        info!(
            city = %spec.city,
            month = %spec.month,
            day = %spec.day,
            rows = trips.len(),
            "loaded and filtered trip data"
        );
        Ok(trips)
    }

    fn read_city_file(&self, path: &Path, spec: &FilterSpec) -> BikeshareResult<Vec<Trip>> {
        if !path.exists() {
            return Err(BikeshareError::DataSourceNotFound {
                city: spec.city.to_string(),
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut trips = Vec::new();
        for (row, record) in reader.deserialize::<RawTrip>().enumerate() {
            let trip = Trip::from_raw(record?, row)?;
            if spec.month.matches(trip.month) && spec.day.matches(trip.weekday) {
                trips.push(trip);
            }
        }
        Ok(trips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, DayFilter, MonthFilter};
    use std::io::Write;

    const HEADER: &str =
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

    fn write_fixture(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    fn loader_for(file: &tempfile::NamedTempFile) -> TripLoader {
        let toml = format!("[cities]\nC = {:?}\n", file.path().to_str().unwrap());
        TripLoader::new(CityConfig::from_toml_str(&toml).unwrap())
    }

    fn spec(month: MonthFilter, day: DayFilter) -> FilterSpec {
        FilterSpec {
            city: City::Chicago,
            month,
            day,
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let loader = TripLoader::new(
            CityConfig::from_toml_str("[cities]\nC = \"/does/not/exist.csv\"\n").unwrap(),
        );
        let err = loader
            .load(&spec(MonthFilter::All, DayFilter::All))
            .unwrap_err();
        assert!(matches!(err, BikeshareError::DataSourceNotFound { .. }));
    }

    #[test]
    fn test_load_unfiltered() {
        let file = write_fixture(&[
            "2017-01-02 09:00:00,2017-01-02 09:10:00,600,A,B,Subscriber,Male,1989",
            "2017-02-05 18:30:00,2017-02-05 18:45:00,900,B,A,Customer,,",
        ]);
        let trips = loader_for(&file)
            .load(&spec(MonthFilter::All, DayFilter::All))
            .unwrap();

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].month, 1);
        assert_eq!(trips[0].weekday, 0); // 2017-01-02 was a Monday
        assert_eq!(trips[0].hour, 9);
        assert_eq!(trips[1].gender, None);
        assert_eq!(trips[1].birth_year, None);
    }

    #[test]
    fn test_month_and_day_filters_are_anded() {
        let file = write_fixture(&[
            "2017-01-02 09:00:00,,600,A,B,,,", // Jan, Monday
            "2017-01-07 09:00:00,,600,A,B,,,", // Jan, Saturday
            "2017-03-06 09:00:00,,600,A,B,,,", // Mar, Monday
        ]);
        let loader = loader_for(&file);

        let jan = loader
            .load(&spec(MonthFilter::Single(1), DayFilter::All))
            .unwrap();
        assert_eq!(jan.len(), 2);

        let jan_weekdays = loader
            .load(&spec(MonthFilter::Single(1), DayFilter::Weekdays))
            .unwrap();
        assert_eq!(jan_weekdays.len(), 1);
        assert_eq!(jan_weekdays[0].weekday, 0);
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let file = write_fixture(&["01/02/2017 09:00,,600,A,B,,,"]);
        let err = loader_for(&file)
            .load(&spec(MonthFilter::All, DayFilter::All))
            .unwrap_err();
        assert!(matches!(err, BikeshareError::DataFormat(_)));
    }

    #[test]
    fn test_gender_and_birth_year_columns_absent() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "Start Time,End Time,Trip Duration,Start Station,End Station,User Type"
        )
        .unwrap();
        writeln!(file, "2017-04-01 12:00:00,,300,A,B,Subscriber").unwrap();

        let trips = loader_for(&file)
            .load(&spec(MonthFilter::All, DayFilter::All))
            .unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].gender, None);
        assert_eq!(trips[0].birth_year, None);
        assert_eq!(trips[0].user_type.as_deref(), Some("Subscriber"));
    }
}
