//! Resolver error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the county reference table
///
/// Resolution itself never fails; an unknown county is a normal
/// [`MatchMethod::Unmatched`](crate::MatchMethod::Unmatched) result.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Reference file could not be read
    #[error("Failed to read county table {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reference data is not a list of `{name, tax_rate}` records
    #[error("Malformed county table: {0}")]
    Parse(#[from] serde_json::Error),

    /// Table has no records
    #[error("County table is empty")]
    Empty,

    /// A record has a blank name
    #[error("County record {index} has a blank name")]
    BlankName {
        /// Zero-based position in the table
        index: usize,
    },

    /// Two records normalise to the same name
    #[error("Duplicate county name: {0}")]
    DuplicateName(String),

    /// Tax rate is not a finite fraction in [0, 1]
    #[error("Invalid tax rate {rate} for county {name}")]
    InvalidTaxRate {
        /// County name
        name: String,
        /// Offending rate
        rate: f64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
