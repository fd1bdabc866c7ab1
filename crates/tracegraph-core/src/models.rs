// Rust guideline compliant 2026-10-16

//! Graph item models.

use crate::Category;
use std::fmt;

/// Which half of the graph an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    /// Relationship between two nodes.
    Edges,
    /// Entity.
    Nodes,
}

impl Group {
    /// The `group` value used in the output document.
    pub fn as_str(self) -> &'static str {
        match self {
            Group::Edges => "edges",
            Group::Nodes => "nodes",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity: an issue, component, sprint, or synthesized placeholder.
///
/// Empty strings mean "absent" and are omitted from the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Canonical key.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Category label or raw passthrough type.
    pub kind: String,
    /// Free-form description.
    pub description: String,
    /// First component name, for issues.
    pub component: String,
    /// Tracker status or sprint state.
    pub status: String,
    /// Start date.
    pub start_date: String,
    /// Finish date.
    pub finish_date: String,
}

impl Node {
    /// Creates a node with the given id, label and category.
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: &Category) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: category.as_str().to_string(),
            ..Self::default()
        }
    }
}

/// A directed relationship between two node ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edge {
    /// Canonical key.
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Canonical link label.
    pub kind: String,
    /// Free-form description; sprint edges accumulate one line per occurrence.
    pub description: String,
}

impl Edge {
    /// Creates an edge between two node ids.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind: kind.into(),
            description: String::new(),
        }
    }

    /// Sets the description, builder style.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Expected categories of an edge's endpoints.
///
/// Only used to explain and repair unsound edges; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointHints {
    /// Expected category of the source node.
    pub source: Option<Category>,
    /// Expected category of the target node.
    pub target: Option<Category>,
}

impl EndpointHints {
    /// Hints for both endpoints.
    pub fn new(source: Category, target: Category) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
        }
    }
}

/// A node or an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphItem {
    /// Entity.
    Node(Node),
    /// Relationship.
    Edge(Edge),
}

impl GraphItem {
    /// The item's canonical key.
    pub fn id(&self) -> &str {
        match self {
            GraphItem::Node(node) => &node.id,
            GraphItem::Edge(edge) => &edge.id,
        }
    }

    /// The item's `type` label.
    pub fn kind(&self) -> &str {
        match self {
            GraphItem::Node(node) => &node.kind,
            GraphItem::Edge(edge) => &edge.kind,
        }
    }

    /// Which group the item belongs to.
    pub fn group(&self) -> Group {
        match self {
            GraphItem::Node(_) => Group::Nodes,
            GraphItem::Edge(_) => Group::Edges,
        }
    }

    /// Returns the edge, if this item is one.
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            GraphItem::Edge(edge) => Some(edge),
            GraphItem::Node(_) => None,
        }
    }

    /// Returns the node, if this item is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            GraphItem::Node(node) => Some(node),
            GraphItem::Edge(_) => None,
        }
    }
}

impl From<Node> for GraphItem {
    fn from(node: Node) -> Self {
        GraphItem::Node(node)
    }
}

impl From<Edge> for GraphItem {
    fn from(edge: Edge) -> Self {
        GraphItem::Edge(edge)
    }
}
