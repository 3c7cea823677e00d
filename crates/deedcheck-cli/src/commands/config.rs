//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    explicit: Option<&Path>,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<()> {
    match args.action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", config_path(explicit)?.display())?;
        }
        ConfigAction::Init { force } => {
            let path = config_path(explicit)?;
            init_config(&path, force)?;
            writeln!(
                out,
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            )?;
        }
    }
    Ok(())
}

fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::path(),
    }
}

/// Write the default configuration, refusing to clobber an existing file.
fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}
