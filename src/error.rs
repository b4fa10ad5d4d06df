//! Error types for dataset loading and filter resolution.

use std::path::PathBuf;

/// Result type for bikeshare operations
pub type BikeshareResult<T> = Result<T, BikeshareError>;

/// Error type for bikeshare operations
#[derive(Debug, thiserror::Error)]
pub enum BikeshareError {
    /// Unrecognized city, month, or day token. Recoverable: the interactive
    /// loop re-prompts on this variant instead of aborting.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Programming-contract violation, e.g. negative seconds handed to the
    /// duration formatter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backing data file for a city is missing. Fatal for the session
    /// iteration.
    #[error("Data source not found for {city}: {}", path.display())]
    DataSourceNotFound { city: String, path: PathBuf },

    /// A row could not be interpreted, typically an unparsable start
    /// timestamp. Fatal for the session iteration.
    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
