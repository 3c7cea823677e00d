//! Extract command implementation.

use super::read_input;
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use deedcheck_extractor::FieldExtractor;
use std::io::Write;

/// Execute the extract command.
pub fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<()> {
    let extractor = FieldExtractor::new(config.extractor.clone())?;
    let fields = extractor.extract(&read_input(&args.input)?);

    writeln!(out, "{}", formatter.format_fields(&fields)?)?;
    Ok(())
}
