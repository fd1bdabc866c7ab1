// Rust guideline compliant 2026-10-16

//! Implementation of the `tracegraph jql` command.

use tracegraph_core::{build_jql, Config};

/// Prints the static-issue query for the configuration.
pub fn execute(config: &Config) {
    println!("{}", render(config));
}

/// The query string the extractor would send.
pub fn render(config: &Config) -> String {
    build_jql(
        config.projects.as_slice(),
        config.tracked_issue_types().as_slice(),
    )
}
