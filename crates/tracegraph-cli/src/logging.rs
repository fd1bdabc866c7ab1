// Rust guideline compliant 2026-10-16

//! Tracing subscriber setup.
//!
//! Log lines go to stderr so command output on stdout stays machine-readable.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a `--log-level` value.
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info or debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level: {}", other),
    }
}

/// Picks the effective level: an explicit flag wins, then the debug setting.
///
/// # Errors
///
/// Returns an error if the flag is not a valid level.
pub fn resolve_level(flag: Option<&str>, debug: bool) -> Result<Level> {
    match flag {
        Some(level) => parse_log_level(level),
        None if debug => Ok(Level::DEBUG),
        None => Ok(Level::INFO),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_tracing(level: Level, json: bool) {
    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return;
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
