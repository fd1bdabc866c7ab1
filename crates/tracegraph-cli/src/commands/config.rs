// Rust guideline compliant 2026-10-16

//! Implementation of the `tracegraph config` command.

use anyhow::{Context, Result};
use std::path::Path;
use tracegraph_core::Config;

/// Prints the effective configuration, or writes it to `write` when given.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn execute(config: &Config, write: Option<&Path>) -> Result<()> {
    match write {
        Some(path) => {
            config
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
