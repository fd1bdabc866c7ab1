// Rust guideline compliant 2026-10-16

//! In-memory graph store.
//!
//! The store keeps items in insertion order and indexes them by canonical id.
//! It owns the deduplication invariant: an id is inserted at most once and a
//! later item with the same id never replaces the first.

use crate::normalize::normalize_id;
use crate::{Edge, EndpointHints, GraphItem, Group, Node};
use std::collections::HashMap;
use tracing::warn;

/// Append-ordered graph with an id index.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Items in insertion order.
    items: Vec<GraphItem>,
    /// Canonical id to position in `items`.
    index: HashMap<String, usize>,
    /// Endpoint category hints, keyed by edge id.
    hints: HashMap<String, EndpointHints>,
    /// Number of rejected duplicate inserts.
    duplicates: usize,
}

impl GraphStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item unless its id is already present.
    ///
    /// The id (and an edge's source and target) are normalized first. A
    /// duplicate is logged and counted, and the existing item is kept.
    ///
    /// # Returns
    ///
    /// True if the item was inserted.
    pub fn add(&mut self, item: impl Into<GraphItem>) -> bool {
        let item = canonicalize(item.into());
        if self.index.contains_key(item.id()) {
            warn!(id = item.id(), group = %item.group(), "Duplicate item with key {}", item.id());
            self.duplicates += 1;
            return false;
        }
        self.index.insert(item.id().to_string(), self.items.len());
        self.items.push(item);
        true
    }

    /// Inserts an edge and records the expected categories of its endpoints.
    ///
    /// Hints are only recorded when the edge itself is inserted.
    pub fn add_edge(&mut self, edge: Edge, hints: EndpointHints) -> bool {
        let id = normalize_id(&edge.id);
        let inserted = self.add(edge);
        if inserted {
            self.hints.insert(id, hints);
        }
        inserted
    }

    /// True when an item with the canonical id exists.
    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up an item by canonical id.
    pub fn get(&self, id: &str) -> Option<&GraphItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Appends a line to an existing item's description.
    ///
    /// An empty description takes the line as-is; otherwise the line is
    /// joined with a newline.
    ///
    /// # Returns
    ///
    /// False if no item has the id.
    pub fn append_description(&mut self, id: &str, line: &str) -> bool {
        let Some(&pos) = self.index.get(id) else {
            return false;
        };
        let description = match &mut self.items[pos] {
            GraphItem::Node(node) => &mut node.description,
            GraphItem::Edge(edge) => &mut edge.description,
        };
        if !description.is_empty() {
            description.push('\n');
        }
        description.push_str(line);
        true
    }

    /// Endpoint hints recorded for an edge.
    pub fn hints(&self, edge_id: &str) -> Option<&EndpointHints> {
        self.hints.get(edge_id)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[GraphItem] {
        &self.items
    }

    /// Items of one group, in insertion order.
    pub fn items_by_group(&self, group: Group) -> impl Iterator<Item = &GraphItem> + '_ {
        self.items.iter().filter(move |item| item.group() == group)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.items.iter().filter_map(GraphItem::as_node)
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.items.iter().filter_map(GraphItem::as_edge)
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Number of duplicate inserts rejected so far.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Removes every edge for which `keep` returns false.
    ///
    /// Reserved for the integrity pass. Nodes are never removed.
    ///
    /// # Returns
    ///
    /// The number of edges removed.
    pub(crate) fn retain_edges<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Edge) -> bool,
    {
        let before = self.items.len();
        let hints = &mut self.hints;
        self.items.retain(|item| match item {
            GraphItem::Edge(edge) => {
                let kept = keep(edge);
                if !kept {
                    hints.remove(&edge.id);
                }
                kept
            }
            GraphItem::Node(_) => true,
        });
        let removed = before - self.items.len();
        if removed > 0 {
            self.reindex();
        }
        removed
    }

    fn reindex(&mut self) {
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id().to_string(), pos))
            .collect();
    }
}

fn canonicalize(item: GraphItem) -> GraphItem {
    match item {
        GraphItem::Node(mut node) => {
            node.id = normalize_id(&node.id);
            GraphItem::Node(node)
        }
        GraphItem::Edge(mut edge) => {
            edge.id = normalize_id(&edge.id);
            edge.source = normalize_id(&edge.source);
            edge.target = normalize_id(&edge.target);
            GraphItem::Edge(edge)
        }
    }
}
