// Rust guideline compliant 2026-10-16

//! Referential-integrity pass over a built graph.
//!
//! An edge is sound when both endpoints are non-empty and present in the
//! store. Exactly one [`IntegrityPolicy`] is applied per run.

use crate::normalize::normalize_id;
use crate::{Error, GraphStore, Node, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Category given to placeholders when the edge carries no hint.
const UNKNOWN_CATEGORY: &str = "unknown";

/// What to do about unsound edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityPolicy {
    /// Log unsound edges; leave the graph untouched.
    #[default]
    Report,
    /// Synthesize placeholder nodes for missing endpoints.
    Repair,
    /// Remove unsound edges.
    Trim,
}

impl FromStr for IntegrityPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "repair" => Ok(Self::Repair),
            "trim" => Ok(Self::Trim),
            other => Err(Error::Config(format!(
                "integrity policy must be report, repair, or trim, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for IntegrityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Report => "report",
            Self::Repair => "repair",
            Self::Trim => "trim",
        })
    }
}

/// Which end of an edge is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// The `source` field.
    Source,
    /// The `target` field.
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Target => "target",
        })
    }
}

/// Why an edge is unsound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum Defect {
    /// The endpoint id is empty.
    Empty {
        /// Affected end.
        endpoint: Endpoint,
    },
    /// The endpoint id names no node in the store.
    Missing {
        /// Affected end.
        endpoint: Endpoint,
        /// The dangling id.
        id: String,
        /// Category the edge expected there, when known.
        expected: Option<String>,
    },
}

/// One unsound edge and everything wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsoundEdge {
    /// Edge id.
    pub edge_id: String,
    /// Defects, source first.
    pub defects: Vec<Defect>,
}

/// Outcome of an integrity pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Edges found sound.
    pub sound: usize,
    /// Edges found unsound, in store order.
    pub unsound: Vec<UnsoundEdge>,
    /// Placeholder nodes created (repair only).
    pub placeholders_added: usize,
    /// Edges removed (repair and trim).
    pub edges_removed: usize,
}

impl IntegrityReport {
    /// True when no unsound edge was found.
    pub fn is_clean(&self) -> bool {
        self.unsound.is_empty()
    }
}

/// Runs the selected policy against the store.
pub fn apply(policy: IntegrityPolicy, store: &mut GraphStore) -> IntegrityReport {
    match policy {
        IntegrityPolicy::Report => check(store),
        IntegrityPolicy::Repair => repair(store),
        IntegrityPolicy::Trim => trim(store),
    }
}

/// Scans every edge and logs the unsound ones. Never mutates the store.
pub fn check(store: &GraphStore) -> IntegrityReport {
    info!("Checking node structure");
    let mut report = IntegrityReport::default();
    for edge in store.edges() {
        let defects = defects_of(store, &edge.id, &edge.source, &edge.target);
        if defects.is_empty() {
            report.sound += 1;
            continue;
        }
        for defect in &defects {
            match defect {
                Defect::Empty { endpoint } => {
                    warn!(edge = %edge.id, "Empty {}", endpoint);
                }
                Defect::Missing {
                    endpoint,
                    id,
                    expected,
                } => {
                    warn!(
                        edge = %edge.id,
                        "Missing {} node: {} ({})",
                        endpoint,
                        id,
                        expected.as_deref().unwrap_or(UNKNOWN_CATEGORY)
                    );
                }
            }
        }
        report.unsound.push(UnsoundEdge {
            edge_id: edge.id.clone(),
            defects,
        });
    }
    info!(good = report.sound, bad = report.unsound.len(), "Integrity check");
    report
}

/// Adds a placeholder node for every missing endpoint.
///
/// Placeholders are labelled with the raw id and typed with the edge's
/// expected category. Edges with an empty endpoint cannot be repaired and
/// are removed, so no unsound edge survives.
pub fn repair(store: &mut GraphStore) -> IntegrityReport {
    let mut report = check(store);

    let mut placeholders = Vec::new();
    for unsound in &report.unsound {
        for defect in &unsound.defects {
            if let Defect::Missing { id, expected, .. } = defect {
                placeholders.push(Node {
                    id: normalize_id(id),
                    label: id.clone(),
                    kind: expected.clone().unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
                    ..Node::default()
                });
            }
        }
    }
    for node in placeholders {
        // Two edges may share the same missing endpoint
        if store.exists(&node.id) {
            continue;
        }
        info!(id = %node.id, kind = %node.kind, "Adding placeholder node");
        store.add(node);
        report.placeholders_added += 1;
    }

    report.edges_removed =
        store.retain_edges(|edge| !edge.source.is_empty() && !edge.target.is_empty());
    if report.edges_removed > 0 {
        warn!(count = report.edges_removed, "Removed edges with empty endpoints");
    }
    report
}

/// Removes every unsound edge.
pub fn trim(store: &mut GraphStore) -> IntegrityReport {
    let mut report = check(store);
    let doomed: std::collections::HashSet<String> =
        report.unsound.iter().map(|u| u.edge_id.clone()).collect();
    report.edges_removed = store.retain_edges(|edge| !doomed.contains(&edge.id));
    if report.edges_removed > 0 {
        warn!(count = report.edges_removed, "Trimmed unsound edges");
    }
    report
}

fn defects_of(store: &GraphStore, edge_id: &str, source: &str, target: &str) -> Vec<Defect> {
    let hints = store.hints(edge_id);
    let mut defects = Vec::new();
    for (endpoint, id, expected) in [
        (
            Endpoint::Source,
            source,
            hints.and_then(|h| h.source.as_ref()),
        ),
        (
            Endpoint::Target,
            target,
            hints.and_then(|h| h.target.as_ref()),
        ),
    ] {
        if id.is_empty() {
            defects.push(Defect::Empty { endpoint });
        } else if !store.exists(id) {
            defects.push(Defect::Missing {
                endpoint,
                id: id.to_string(),
                expected: expected.map(|c| c.as_str().to_string()),
            });
        }
    }
    defects
}
