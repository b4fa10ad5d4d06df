//! City identifiers.

use serde::{Deserialize, Serialize};

use crate::error::{BikeshareError, BikeshareResult};

/// Enumerated city selecting which dataset to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// Parse a single-letter city code, case-insensitive and trimmed.
    ///
    /// # Errors
    /// Returns [`BikeshareError::InvalidFilter`] for anything other than
    /// `C`, `N`, or `W`.
    pub fn parse(token: &str) -> BikeshareResult<Self> {
        match token.trim().to_uppercase().as_str() {
            "C" => Ok(City::Chicago),
            "N" => Ok(City::NewYork),
            "W" => Ok(City::Washington),
            other => Err(BikeshareError::InvalidFilter(format!(
                "unknown city code '{}', expected C, N, or W",
                other
            ))),
        }
    }

    /// Human-readable city name for display.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
