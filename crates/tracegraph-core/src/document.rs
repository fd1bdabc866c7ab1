// Rust guideline compliant 2026-10-16

//! The persisted graph document.
//!
//! The document is a single JSON object:
//!
//! ```json
//! { "graph": [ { "group": "edges", "data": { "id": "...", "source": "...", ... } } ] }
//! ```
//!
//! `data` fields are omitted when empty or zero. Edges are written before
//! nodes; within a group, insertion order is kept. The ordering is cosmetic.

use crate::{Edge, Error, GraphItem, GraphStore, Node, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Top-level output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Items, edges first.
    pub graph: Vec<WireItem>,
}

/// One entry of the `graph` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "group", content = "data")]
pub enum WireItem {
    /// A node's data.
    #[serde(rename = "nodes")]
    Node(ItemData),
    /// An edge's data.
    #[serde(rename = "edges")]
    Edge(ItemData),
}

/// The `data` object shared by nodes and edges.
///
/// `parent`, `from`, `to`, `degree` and `version` belong to the document
/// format but are never produced by the builder; they are accepted on load
/// and dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub degree: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub component: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub finish_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl From<&GraphItem> for WireItem {
    fn from(item: &GraphItem) -> Self {
        match item {
            GraphItem::Node(node) => WireItem::Node(ItemData {
                id: node.id.clone(),
                label: node.label.clone(),
                kind: node.kind.clone(),
                component: node.component.clone(),
                status: node.status.clone(),
                start_date: node.start_date.clone(),
                finish_date: node.finish_date.clone(),
                description: node.description.clone(),
                ..ItemData::default()
            }),
            GraphItem::Edge(edge) => WireItem::Edge(ItemData {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                kind: edge.kind.clone(),
                description: edge.description.clone(),
                ..ItemData::default()
            }),
        }
    }
}

impl From<WireItem> for GraphItem {
    fn from(item: WireItem) -> Self {
        match item {
            WireItem::Node(data) => GraphItem::Node(Node {
                id: data.id,
                label: data.label,
                kind: data.kind,
                description: data.description,
                component: data.component,
                status: data.status,
                start_date: data.start_date,
                finish_date: data.finish_date,
            }),
            WireItem::Edge(data) => GraphItem::Edge(Edge {
                id: data.id,
                source: data.source,
                target: data.target,
                kind: data.kind,
                description: data.description,
            }),
        }
    }
}

impl Document {
    /// Orders the store's items, edges first, and converts them.
    pub fn from_store(store: &GraphStore) -> Self {
        let mut items: Vec<&GraphItem> = store.items().iter().collect();
        // Stable: insertion order survives within each group
        items.sort_by_key(|item| item.group());
        Self {
            graph: items.into_iter().map(WireItem::from).collect(),
        }
    }

    /// Rebuilds a store from the document.
    ///
    /// Endpoint hints are not part of the document, so integrity reports on a
    /// reloaded store carry no expected categories.
    ///
    /// # Errors
    ///
    /// Returns an error if an item has an empty id.
    pub fn into_store(self) -> Result<GraphStore> {
        let mut store = GraphStore::new();
        for (position, wire) in self.graph.into_iter().enumerate() {
            let item = GraphItem::from(wire);
            if item.id().is_empty() {
                return Err(Error::InvalidDocument(format!(
                    "item {} has no id",
                    position
                )));
            }
            store.add(item);
        }
        Ok(store)
    }

    /// Number of items in the document.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// True when the document has no items.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Renders the document as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid graph document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        info!(
            path = %path.display(),
            items = self.len(),
            "Wrote graph document"
        );
        Ok(())
    }

    /// Reads a document from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
