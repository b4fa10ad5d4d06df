//! Trip records: the raw CSV row shape and the enriched in-memory form.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::error::{BikeshareError, BikeshareResult};

/// Timestamp format used by all three city datasets.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row as it appears in a city CSV. Gender and birth year are entire
/// columns missing from some cities, so they default to `None` rather than
/// failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A trip record with the hour/month/weekday columns derived from the start
/// timestamp at load time.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Trip duration in seconds, non-negative.
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Day of week, 0 = Monday .. 6 = Sunday.
    pub weekday: u32,
}

impl Trip {
    /// Build an enriched trip from a raw row.
    ///
    /// # Errors
    /// Returns [`BikeshareError::DataFormat`] if the start timestamp cannot
    /// be parsed; `row` is the record position used in the message.
    pub fn from_raw(raw: RawTrip, row: usize) -> BikeshareResult<Self> {
        let start_time =
            NaiveDateTime::parse_from_str(&raw.start_time, TIMESTAMP_FORMAT).map_err(|e| {
                BikeshareError::DataFormat(format!(
                    "row {}: unparsable start time '{}': {}",
                    row, raw.start_time, e
                ))
            })?;

        Ok(Self {
            hour: start_time.hour(),
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            start_time,
            end_time: raw.end_time,
            duration_seconds: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type.filter(|s| !s.is_empty()),
            gender: raw.gender.filter(|s| !s.is_empty()),
            birth_year: raw.birth_year.map(|y| y as i32),
        })
    }
}
