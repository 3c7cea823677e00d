//! Deedcheck Resolver
//!
//! Maps a free-text county name, as typed or OCR'd on a deed, to a canonical
//! record in the county reference table.
//!
//! The resolver provides:
//! - Exact matching, ignoring case, spacing and a trailing "County"
//! - Abbreviation expansion (`S. Clara` -> `Santa Clara`) and initialisms (`S.C.`)
//! - Approximate matching by normalised Levenshtein similarity
//! - Fail-fast loading of the reference table
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use deedcheck_resolver::{CountyResolver, CountyTable, ResolverConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Arc::new(CountyTable::load("counties.json")?);
//! let resolver = CountyResolver::new(table, ResolverConfig::default())?;
//!
//! let result = resolver.resolve("S. Clara");
//! println!("{:?} via {} ({:.2})", result.matched_record, result.method, result.confidence);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod normalize;
mod resolver;
mod table;

pub use config::ResolverConfig;
pub use error::ResolverError;
pub use normalize::normalize;
pub use resolver::{
    similarity, CountyResolver, MatchMethod, ResolutionResult, ALIAS_CONFIDENCE,
    EXACT_CONFIDENCE,
};
pub use table::CountyTable;
