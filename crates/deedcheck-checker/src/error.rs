//! Checker error types

use deedcheck_extractor::ExtractorError;
use deedcheck_resolver::ResolverError;
use thiserror::Error;

/// Errors that can occur while assembling a checker or pipeline
///
/// Checking a document never fails; every anomaly in a deed becomes a
/// finding in its report.
#[derive(Error, Debug)]
pub enum CheckerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extractor could not be built
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Resolver could not be built or its table could not be loaded
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),
}
