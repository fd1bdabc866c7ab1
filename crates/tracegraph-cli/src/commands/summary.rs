// Rust guideline compliant 2026-10-16

//! Implementation of the `tracegraph summary` command.

use crate::output::OutputFormatter;
use anyhow::{Context, Result};
use std::path::Path;
use tracegraph_core::integrity;
use tracegraph_core::summary::histogram;
use tracegraph_core::Document;

/// Executes the summary command.
///
/// # Errors
///
/// Returns an error if the document cannot be read or is malformed.
pub fn execute(document: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", render(document, formatter)?);
    Ok(())
}

/// Renders the histogram and integrity report of a saved document.
///
/// # Errors
///
/// Returns an error if the document cannot be read or is malformed.
pub fn render(document: &Path, formatter: &dyn OutputFormatter) -> Result<String> {
    let store = Document::load(document)
        .with_context(|| format!("Failed to read {}", document.display()))?
        .into_store()?;

    let report = integrity::check(&store);
    Ok(format!(
        "{}\n{}",
        formatter.format_histogram(&histogram(&store)),
        formatter.format_integrity(&report)
    ))
}
