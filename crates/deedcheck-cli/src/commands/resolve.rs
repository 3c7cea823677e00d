//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use deedcheck_resolver::{CountyResolver, CountyTable};
use std::io::Write;
use std::sync::Arc;

/// Execute the resolve command.
pub fn execute_resolve(
    args: ResolveArgs,
    config: &Config,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<()> {
    if args.county.trim().is_empty() {
        return Err(CliError::InvalidInput("County name must not be empty".to_string()));
    }

    let table = Arc::new(CountyTable::load(&args.counties)?);
    let resolver = CountyResolver::new(table, config.resolver.clone())?;
    let result = resolver.resolve(&args.county);

    writeln!(out, "{}", formatter.format_resolution(&args.county, &result)?)?;
    Ok(())
}
