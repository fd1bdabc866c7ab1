// Rust guideline compliant 2026-10-16

//! Output formatting module for the Tracegraph CLI.
//!
//! Renders graph summaries either as tables for people or as JSON for
//! scripts.

use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use tracegraph_core::integrity::{Defect, IntegrityReport};
use tracegraph_core::Histogram;

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats the per-type counts of a graph.
    fn format_histogram(&self, histogram: &Histogram) -> String;

    /// Formats the result of an integrity pass.
    fn format_integrity(&self, report: &IntegrityReport) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_histogram(&self, histogram: &Histogram) -> String {
        let output = json!({
            "nodes": histogram.nodes,
            "edges": histogram.edges,
            "node_total": histogram.node_total(),
            "edge_total": histogram.edge_total(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize histogram" }).to_string())
    }

    fn format_integrity(&self, report: &IntegrityReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_histogram(&self, histogram: &Histogram) -> String {
        if histogram.node_total() + histogram.edge_total() == 0 {
            return "Graph is empty.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Group", "Type", "Count"]);
        for (kind, count) in &histogram.nodes {
            builder.push_record(vec!["nodes".to_string(), kind.clone(), count.to_string()]);
        }
        for (kind, count) in &histogram.edges {
            builder.push_record(vec!["edges".to_string(), kind.clone(), count.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!(
            "{}\n{} nodes, {} edges",
            table,
            histogram.node_total(),
            histogram.edge_total()
        )
    }

    fn format_integrity(&self, report: &IntegrityReport) -> String {
        let mut output = format!(
            "Integrity: {} sound, {} unsound",
            report.sound,
            report.unsound.len()
        );
        if report.placeholders_added > 0 {
            output.push_str(&format!(", {} placeholders added", report.placeholders_added));
        }
        if report.edges_removed > 0 {
            output.push_str(&format!(", {} edges removed", report.edges_removed));
        }
        output.push('\n');

        for unsound in &report.unsound {
            for defect in &unsound.defects {
                let line = match defect {
                    Defect::Empty { endpoint } => {
                        format!("  {}: empty {}", unsound.edge_id, endpoint)
                    }
                    Defect::Missing {
                        endpoint,
                        id,
                        expected,
                    } => match expected {
                        Some(kind) => format!(
                            "  {}: missing {} {} ({})",
                            unsound.edge_id, endpoint, id, kind
                        ),
                        None => format!("  {}: missing {} {}", unsound.edge_id, endpoint, id),
                    },
                };
                output.push_str(&line);
                output.push('\n');
            }
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Creates the formatter for the requested mode.
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}

/// Renders a failed command's error chain for stderr.
pub fn render_error(err: &anyhow::Error, json: bool) -> String {
    create_formatter(json).format_error(&format!("{:#}", err))
}
