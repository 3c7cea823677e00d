//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Deedcheck - Validate OCR'd property deeds before they are recorded.
#[derive(Debug, Parser)]
#[command(name = "deedcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (defaults to ~/.deedcheck/config.toml)
    #[arg(short, long, global = true, env = "DEEDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdict only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a deed and print its report
    Validate(ValidateArgs),

    /// Print the fields extracted from a deed
    Extract(ExtractArgs),

    /// Resolve a county name against the reference table
    Resolve(ResolveArgs),

    /// Show or initialise the configuration
    Config(ConfigArgs),
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Deed text file, or - for stdin
    pub input: String,

    /// County reference table (JSON array of {name, tax_rate})
    #[arg(long, env = "DEEDCHECK_COUNTIES")]
    pub counties: PathBuf,

    /// Override the configured checker thresholds with a preset
    #[arg(short, long, value_enum)]
    pub preset: Option<PresetArg>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Deed text file, or - for stdin
    pub input: String,
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// County name as written on the deed
    pub county: String,

    /// County reference table (JSON array of {name, tax_rate})
    #[arg(long, env = "DEEDCHECK_COUNTIES")]
    pub counties: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML (default)
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration to the configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Checker threshold presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Default thresholds
    Default,
    /// Reject any discrepancy above one cent
    Strict,
    /// Tolerate rounding in the written amount
    Lenient,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for deedcheck_checker::CheckerConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => deedcheck_checker::CheckerConfig::default(),
            PresetArg::Strict => deedcheck_checker::CheckerConfig::strict(),
            PresetArg::Lenient => deedcheck_checker::CheckerConfig::lenient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_command() {
        let cli = Cli::parse_from([
            "deedcheck",
            "validate",
            "deed.txt",
            "--counties",
            "counties.json",
        ]);
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.input, "deed.txt");
                assert_eq!(args.counties, PathBuf::from("counties.json"));
                assert!(args.preset.is_none());
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["deedcheck", "-vv", "--format", "json", "extract", "-"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Command::Extract(_)));
    }

    #[test]
    fn test_config_defaults_to_show() {
        let cli = Cli::parse_from(["deedcheck", "config"]);
        match cli.command {
            Command::Config(args) => assert!(args.action.is_none()),
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_preset_conversion() {
        let config: deedcheck_checker::CheckerConfig = PresetArg::Lenient.into();
        assert_eq!(config.amount_relative_tolerance, 0.05);
    }
}
