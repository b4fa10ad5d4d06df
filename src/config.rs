//! City-to-data-file configuration.
//!
//! The mapping from city identifier to CSV path is resolved once at startup
//! and passed into [`crate::loader::TripLoader`] rather than read from
//! ambient state, so tests and alternate deployments can point each city at
//! their own fixture files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BikeshareError, BikeshareResult};
use crate::models::City;

/// Raw TOML shape: `[cities]` table of code -> path.
#[derive(Debug, Deserialize)]
struct RawConfig {
    cities: HashMap<String, PathBuf>,
}

/// Resolved mapping from city identifier to its CSV data file.
#[derive(Debug, Clone)]
pub struct CityConfig {
    sources: HashMap<City, PathBuf>,
}

impl CityConfig {
    /// Look up the data file for a city.
    ///
    /// # Errors
    /// Returns [`BikeshareError::Configuration`] if the city has no entry.
    pub fn source_for(&self, city: City) -> BikeshareResult<&Path> {
        self.sources
            .get(&city)
            .map(PathBuf::as_path)
            .ok_or_else(|| {
                BikeshareError::Configuration(format!("no data source configured for {}", city))
            })
    }

    /// Parse a configuration from TOML text.
    ///
    /// Expected shape:
    ///
    /// ```toml
    /// [cities]
    /// C = "data/chicago.csv"
    /// N = "data/new_york_city.csv"
    /// W = "data/washington.csv"
    /// ```
    ///
    /// # Errors
    /// Returns [`BikeshareError::Configuration`] on malformed TOML or an
    /// unrecognized city code.
    pub fn from_toml_str(text: &str) -> BikeshareResult<Self> {
        let raw: RawConfig = toml::from_str(text)
            .map_err(|e| BikeshareError::Configuration(format!("invalid config: {}", e)))?;

        let mut sources = HashMap::new();
        for (code, path) in raw.cities {
            let city = City::parse(&code)?;
            sources.insert(city, path);
        }
        Ok(Self { sources })
    }

    /// Load configuration from a TOML file, falling back to the built-in
    /// defaults when the file does not exist.
    pub fn from_file_or_default(path: &Path) -> BikeshareResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Default for CityConfig {
    /// The conventional file names, relative to the working directory.
    fn default() -> Self {
        let sources = HashMap::from([
            (City::Chicago, PathBuf::from("chicago.csv")),
            (City::NewYork, PathBuf::from("new_york_city.csv")),
            (City::Washington, PathBuf::from("washington.csv")),
        ]);
        Self { sources }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_all_cities() {
        let config = CityConfig::default();
        for city in [City::Chicago, City::NewYork, City::Washington] {
            assert!(config.source_for(city).is_ok());
        }
    }

    #[test]
    fn test_from_toml_str() {
        let config = CityConfig::from_toml_str(
            r#"
            [cities]
            C = "fixtures/chi.csv"
            W = "fixtures/was.csv"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.source_for(City::Chicago).unwrap(),
            Path::new("fixtures/chi.csv")
        );
        assert!(config.source_for(City::NewYork).is_err());
    }

    #[test]
    fn test_invalid_city_code_rejected() {
        let result = CityConfig::from_toml_str("[cities]\nX = \"x.csv\"\n");
        assert!(result.is_err());
    }
}
