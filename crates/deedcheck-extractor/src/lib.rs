//! Deedcheck Extractor
//!
//! Pulls named fields out of loosely formatted deed OCR text.
//!
//! # Overview
//!
//! Deed scans arrive as a block of `Label: value` lines with the odd pipe
//! separator and parenthesised note. The extractor runs an ordered list of
//! tolerant, label-anchored rules over that text. Each rule either fills its
//! field or leaves it empty; nothing here ever returns an error for a
//! document.
//!
//! # Architecture
//!
//! ```text
//! Text → FieldExtractor → [FieldRule, FieldRule, ...] → ExtractedFields
//! ```
//!
//! # Example Usage
//!
//! ```
//! use deedcheck_extractor::FieldExtractor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = FieldExtractor::standard()?;
//! let fields = extractor.extract("Doc: DEED-TRUST-0042\nCounty: S. Clara | State: CA");
//!
//! assert_eq!(fields.doc_id.as_deref(), Some("DEED-TRUST-0042"));
//! assert_eq!(fields.county_raw.as_deref(), Some("S. Clara"));
//! assert_eq!(fields.state.as_deref(), Some("CA"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Additional fields are added by implementing [`FieldRule`] and passing it
//! to [`FieldExtractor::with_rule`].

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod rules;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::FieldExtractor;
pub use rules::{AmountRule, DateRule, FieldRule, TextRule};
