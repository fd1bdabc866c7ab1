// Rust guideline compliant 2026-10-16

//! Implementation of the `tracegraph extract` command.
//!
//! Runs the extraction pipeline against a snapshot file and writes the graph
//! document.

use crate::output::OutputFormatter;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracegraph_core::{extract, Config, Document, Extraction, IntegrityPolicy, SnapshotSource};

/// Executes the extract command.
///
/// # Arguments
///
/// * `config` - Effective configuration
/// * `snapshot` - Snapshot file to read tracker data from
/// * `out` - Output path, overriding `config.output_file`
/// * `integrity` - Integrity policy, overriding `config.integrity`
/// * `formatter` - Renders the closing summary
///
/// # Returns
///
/// The path the document was written to.
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot cannot be read or parsed
/// - The integrity policy name is invalid
/// - The document cannot be written
pub fn execute(
    mut config: Config,
    snapshot: &Path,
    out: Option<PathBuf>,
    integrity: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<PathBuf> {
    if let Some(policy) = integrity {
        config.integrity = policy.parse::<IntegrityPolicy>()?;
    }
    let out = out.unwrap_or_else(|| PathBuf::from(&config.output_file));

    let extraction = run(&config, snapshot, &out)?;

    println!("{}", formatter.format_histogram(&extraction.histogram));
    println!("{}", formatter.format_integrity(&extraction.integrity));
    println!("Wrote {}", out.display());
    Ok(out)
}

/// Extracts the graph from `snapshot` and saves it to `out`.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or the document cannot
/// be written.
pub fn run(config: &Config, snapshot: &Path, out: &Path) -> Result<Extraction> {
    let source = SnapshotSource::load(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
    let extraction = extract::run(&source, config)?;

    Document::from_store(&extraction.store)
        .save(out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    Ok(extraction)
}
