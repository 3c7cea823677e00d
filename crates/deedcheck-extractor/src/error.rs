//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building an extractor
///
/// Extraction itself never fails; these only surface when a rule set or
/// configuration is assembled.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A rule's pattern did not compile
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        /// Name of the offending rule
        rule: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
