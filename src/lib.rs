//! # Bikeshare Exploration Engine
//!
//! Loads a city's bikeshare trip-record dataset, applies user-chosen time
//! filters, and computes descriptive statistics over the filtered trips.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: City identifier to data-file mapping, injected at startup
//! - [`models`]: Filter specification, trip records, duration formatting
//! - [`loader`]: CSV loading, derived time columns, filter application
//! - [`services`]: Statistics routines and the raw-data paginator
//!
//! The interactive prompt loop lives in the `bikeshare` binary; everything
//! it validates or computes is a plain library call that can be exercised
//! from tests without a terminal.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod services;

pub use config::CityConfig;
pub use error::{BikeshareError, BikeshareResult};
pub use loader::TripLoader;
pub use models::{City, DayFilter, FilterSpec, FormattedDuration, MonthFilter, Trip};
