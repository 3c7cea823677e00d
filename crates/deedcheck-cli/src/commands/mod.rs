//! Command implementations.

pub mod config;
pub mod extract;
pub mod resolve;
pub mod validate;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::resolve::execute_resolve;
pub use self::validate::execute_validate;

use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;

/// Read a deed from a file, or from stdin when `input` is `-`.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
