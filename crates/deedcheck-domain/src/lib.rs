//! Deedcheck Domain Layer
//!
//! Value types shared by every stage of the deed pipeline. This crate holds
//! no parsing or matching logic of its own; it only defines what the
//! extractor produces, what the resolver consumes, and how those values
//! serialize into an audit report.
//!
//! ## Key Concepts
//!
//! - **Amount**: a money value held as whole cents
//! - **ExtractedFields**: the optional fields pulled out of one deed's OCR text
//! - **RequiredField**: the completeness set every deed is checked against
//! - **CountyRecord**: one row of the county reference table
//!
//! ## Architecture
//!
//! ```text
//! text -> extractor -> ExtractedFields -> checker (+ resolver, CountyRecord) -> report
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod amount;
pub mod county;
pub mod fields;

// Re-exports for convenience
pub use amount::{Amount, AmountParseError};
pub use county::CountyRecord;
pub use fields::{ExtractedFields, RequiredField};
