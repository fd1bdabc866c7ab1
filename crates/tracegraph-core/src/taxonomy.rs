// Rust guideline compliant 2026-10-16

//! Classification of tracker issue types and link names.
//!
//! The tracker speaks in free-form, instance-specific names ("New Feature",
//! "is a child of"). [`TypeTaxonomy`] maps them onto a small fixed set of
//! semantic categories through lookup tables built once from [`Config`].

use crate::Config;
use std::collections::HashMap;
use std::fmt;

/// Semantic category of a node or edge endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Top-level capability issue.
    Capability,
    /// Feature issue.
    Feature,
    /// Requirement issue.
    Requirement,
    /// Thread issue.
    Thread,
    /// Project component.
    Component,
    /// Sprint.
    Sprint,
    /// Unrecognized passthrough; carries the raw name.
    Other(String),
}

impl Category {
    /// Returns the label written into the `type` field of a node.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Capability => "capability",
            Category::Feature => "feature",
            Category::Requirement => "requirement",
            Category::Thread => "thread",
            Category::Component => "component",
            Category::Sprint => "sprint",
            Category::Other(raw) => raw,
        }
    }

    /// True for the four issue categories that take part in link tracking.
    pub fn is_tracked(&self) -> bool {
        matches!(
            self,
            Category::Capability | Category::Feature | Category::Requirement | Category::Thread
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six relationship kinds a link name can be recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// "is parent of"
    Parent,
    /// "is child of"
    Child,
    /// "traces to"
    TracesTo,
    /// "traces from"
    TracesFrom,
    /// "depends on"
    DependsOut,
    /// "is a dependency of"
    DependsIn,
}

/// Immutable, configuration-derived classifier.
#[derive(Debug, Clone)]
pub struct TypeTaxonomy {
    /// Exact issue-type name to tracked category.
    issue_types: HashMap<String, Category>,
    /// Lower-cased link name to link kind.
    links: HashMap<String, LinkKind>,
    depends_out: String,
    traces_to: String,
    /// Lower-cased process label prefix.
    process_prefix: String,
}

impl TypeTaxonomy {
    /// Builds the lookup tables from configuration.
    ///
    /// When two configured names collide, the earlier entry in
    /// capability/feature/requirement/thread (and parent/child/traces-to/
    /// traces-from/depends-out/depends-in) order wins.
    pub fn from_config(config: &Config) -> Self {
        let mut issue_types = HashMap::new();
        for (name, category) in [
            (&config.capability_issue_type, Category::Capability),
            (&config.feature_issue_type, Category::Feature),
            (&config.requirement_issue_type, Category::Requirement),
            (&config.thread_issue_type, Category::Thread),
        ] {
            issue_types.entry(name.clone()).or_insert(category);
        }

        let mut links = HashMap::new();
        for (name, kind) in [
            (&config.parent_link, LinkKind::Parent),
            (&config.child_link, LinkKind::Child),
            (&config.traces_to_link, LinkKind::TracesTo),
            (&config.traces_from_link, LinkKind::TracesFrom),
            (&config.depends_link_out, LinkKind::DependsOut),
            (&config.depends_link_in, LinkKind::DependsIn),
        ] {
            links.entry(name.to_lowercase()).or_insert(kind);
        }

        Self {
            issue_types,
            links,
            depends_out: config.depends_link_out.clone(),
            traces_to: config.traces_to_link.clone(),
            process_prefix: config.process_prefix.to_lowercase(),
        }
    }

    /// Classifies a tracker issue-type name by exact match.
    ///
    /// Unknown names pass through as [`Category::Other`]; this is not an error.
    pub fn classify_issue_type(&self, name: &str) -> Category {
        self.issue_types
            .get(name)
            .cloned()
            .unwrap_or_else(|| Category::Other(name.to_string()))
    }

    /// Returns which relationship a link name denotes, ignoring case.
    pub fn link_kind(&self, name: &str) -> Option<LinkKind> {
        self.links.get(&name.to_lowercase()).copied()
    }

    /// True when the link name is one of the six configured link names.
    pub fn is_tracked_link(&self, name: &str) -> bool {
        self.link_kind(name).is_some()
    }

    /// Edge label used when a sprint depends on an issue of `category`.
    pub fn dependency_type_for(&self, category: &Category) -> &str {
        match category {
            Category::Requirement => &self.traces_to,
            _ => &self.depends_out,
        }
    }

    /// The default dependency label ("depends-out").
    pub fn default_dependency_type(&self) -> &str {
        &self.depends_out
    }

    /// Extracts the process name from a label carrying the process prefix.
    ///
    /// Matching ignores case and the returned name is lower-cased.
    pub fn process_name(&self, label: &str) -> Option<String> {
        label
            .to_lowercase()
            .strip_prefix(&self.process_prefix)
            .map(str::to_string)
    }
}
