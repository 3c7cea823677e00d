//! Validate command implementation.

use super::read_input;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use deedcheck_checker::{DeedPipeline, ReportStatus};
use deedcheck_resolver::CountyTable;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Execute the validate command.
///
/// A preset replaces the whole `[checker]` section of the configuration.
pub fn execute_validate(
    args: ValidateArgs,
    config: &Config,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<ReportStatus> {
    // Load the table before touching the input so a bad table fails fast
    let table = Arc::new(CountyTable::load(&args.counties)?);

    let mut pipeline_config = config.pipeline();
    if let Some(preset) = args.preset {
        pipeline_config.checker = preset.into();
    }
    let pipeline = DeedPipeline::from_config(table, &pipeline_config)?;

    let text = read_input(&args.input)?;
    let report = pipeline.process(&text);
    info!(input = %args.input, status = %report.status, "Deed validated");

    writeln!(out, "{}", formatter.format_report(&report)?)?;
    Ok(report.status)
}
