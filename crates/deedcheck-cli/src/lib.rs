//! Deedcheck CLI library.
//!
//! This library provides the core functionality for the deedcheck command-line interface,
//! including configuration management, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use deedcheck_checker::ReportStatus;

/// Exit code for an approved deed.
pub const EXIT_APPROVED: u8 = 0;

/// Exit code for a failure to run at all (bad table, unreadable input).
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a rejected deed.
pub const EXIT_REJECTED: u8 = 2;

/// Process exit code for a verdict.
pub fn exit_code(status: ReportStatus) -> u8 {
    match status {
        ReportStatus::Approved => EXIT_APPROVED,
        ReportStatus::Rejected => EXIT_REJECTED,
    }
}
