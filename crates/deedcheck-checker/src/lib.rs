//! Deedcheck Checker
//!
//! Sanity checks for extracted deed fields, and the pipeline that ties
//! extraction, county resolution and checking together.
//!
//! The checker provides:
//! - Completeness checks for the required fields
//! - County enrichment (canonical name and tax rate)
//! - Date logic (a deed cannot be recorded before it is signed)
//! - Amount reconciliation between the numeral and the written words
//!
//! Any critical finding rejects the deed; warnings route it to review.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use deedcheck_checker::DeedPipeline;
//! use deedcheck_resolver::CountyTable;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Arc::new(CountyTable::load("counties.json")?);
//! let pipeline = DeedPipeline::with_defaults(table)?;
//!
//! let report = pipeline.process("Doc: DEED-1\nCounty: S. Clara\n...");
//! println!("{}", report.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod checker;
mod config;
mod error;
mod finding;
mod pipeline;
mod report;
mod words;

pub use checker::DeedChecker;
pub use config::{CheckerConfig, PipelineConfig};
pub use error::CheckerError;
pub use finding::{Finding, Severity};
pub use pipeline::DeedPipeline;
pub use report::{DeedRecord, ReportStatus, ValidationReport, ValidationSummary};
pub use words::{parse_amount_words, WordsError};
