// Rust guideline compliant 2026-10-16

//! Per-type counts of nodes and edges.

use crate::{GraphItem, GraphStore};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Counts of items by `type`, split into nodes and edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Histogram {
    /// Node count per node type.
    pub nodes: BTreeMap<String, usize>,
    /// Edge count per edge type.
    pub edges: BTreeMap<String, usize>,
}

impl Histogram {
    /// Total number of nodes counted.
    pub fn node_total(&self) -> usize {
        self.nodes.values().sum()
    }

    /// Total number of edges counted.
    pub fn edge_total(&self) -> usize {
        self.edges.values().sum()
    }
}

/// Counts every item of the store by its `type` in one pass.
pub fn histogram(store: &GraphStore) -> Histogram {
    let mut histogram = Histogram::default();
    for item in store.items() {
        let bucket = match item {
            GraphItem::Node(_) => &mut histogram.nodes,
            GraphItem::Edge(_) => &mut histogram.edges,
        };
        *bucket.entry(item.kind().to_string()).or_default() += 1;
    }
    histogram
}

/// Logs the histogram as an aligned table.
pub fn log_summary(store: &GraphStore) -> Histogram {
    let histogram = histogram(store);
    info!("GRAPH SUMMARY");
    info!("{:<33}:{:>6}", "Nodes", histogram.node_total());
    for (kind, count) in &histogram.nodes {
        info!("   {:<30}:{:>6}", kind, count);
    }
    info!("{:<33}:{:>6}", "Edges", histogram.edge_total());
    for (kind, count) in &histogram.edges {
        info!("   {:<30}:{:>6}", kind, count);
    }
    histogram
}
