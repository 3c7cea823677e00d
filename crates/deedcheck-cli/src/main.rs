//! Deedcheck CLI - Validate OCR'd property deeds from the command line.

use anyhow::Context;
use clap::Parser;
use deedcheck_cli::commands;
use deedcheck_cli::{exit_code, Cli, Command, Config, Formatter, EXIT_APPROVED, EXIT_FAILURE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Validate(args) => {
            let status = commands::execute_validate(args, &config, &formatter, &mut stdout)?;
            Ok(exit_code(status))
        }
        Command::Extract(args) => {
            commands::execute_extract(args, &config, &formatter, &mut stdout)?;
            Ok(EXIT_APPROVED)
        }
        Command::Resolve(args) => {
            commands::execute_resolve(args, &config, &formatter, &mut stdout)?;
            Ok(EXIT_APPROVED)
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter, &mut stdout)?;
            Ok(EXIT_APPROVED)
        }
    }
}
