// Rust guideline compliant 2026-10-16

//! Graph assembly from tracker records.
//!
//! [`GraphBuilder`] turns batches of decoded records into nodes and edges.
//! It never fails: missing optional fields simply leave output fields empty,
//! and every data-quality problem lands in [`Diagnostics`].

use crate::normalize::normalize_id;
use crate::source::{RawComponent, RawIssue, RawLink, RawSprint};
use crate::{Category, Edge, EndpointHints, GraphStore, Node, TypeTaxonomy};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Category hint recorded for the target of process edges.
const PROCESS_CATEGORY: &str = "process";

/// Data-quality counters collected while building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Component nodes created from component listings.
    pub components_ingested: usize,
    /// Issues ingested through the static pass.
    pub issues_ingested: usize,
    /// Sprints ingested.
    pub sprints_ingested: usize,
    /// Sprint/issue pairings ingested.
    pub sprint_issues_ingested: usize,
    /// Issue type names that matched no configured type, with counts.
    pub unrecognized_issue_types: BTreeMap<String, usize>,
    /// Links skipped because their label is not tracked.
    pub untracked_links: usize,
    /// Tracked links skipped because the linked issue's type is not tracked.
    pub unsupported_links: usize,
    /// Static links skipped because the other side already added them.
    pub mirrored_links: usize,
    /// Sprint edges that received an extra description line.
    pub aggregated_descriptions: usize,
    /// Inserts rejected by the store as duplicates.
    pub duplicate_inserts: usize,
}

impl Diagnostics {
    /// Writes the counters to the log.
    pub fn log(&self) {
        info!(
            components = self.components_ingested,
            issues = self.issues_ingested,
            sprints = self.sprints_ingested,
            sprint_issues = self.sprint_issues_ingested,
            mirrored_links = self.mirrored_links,
            aggregated = self.aggregated_descriptions,
            "Ingestion complete"
        );
        for (name, count) in &self.unrecognized_issue_types {
            warn!(issue_type = %name, count, "Unrecognized issue type");
        }
        if self.untracked_links > 0 || self.unsupported_links > 0 {
            warn!(
                untracked = self.untracked_links,
                unsupported = self.unsupported_links,
                "Links skipped"
            );
        }
        if self.duplicate_inserts > 0 {
            warn!(count = self.duplicate_inserts, "Duplicate inserts rejected");
        }
    }
}

/// Drives node and edge creation for one extraction run.
pub struct GraphBuilder<'a> {
    store: &'a mut GraphStore,
    taxonomy: &'a TypeTaxonomy,
    thread_finish_field: Option<String>,
    diagnostics: Diagnostics,
}

impl<'a> GraphBuilder<'a> {
    /// Creates a builder writing into `store`.
    pub fn new(store: &'a mut GraphStore, taxonomy: &'a TypeTaxonomy) -> Self {
        Self {
            store,
            taxonomy,
            thread_finish_field: None,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Custom field copied into `finish_date` of thread issues.
    pub fn with_thread_finish_field(mut self, field: impl Into<String>) -> Self {
        self.thread_finish_field = Some(field.into());
        self
    }

    /// Counters collected so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Releases the store and returns the final counters.
    pub fn finish(mut self) -> Diagnostics {
        self.diagnostics.duplicate_inserts = self.store.duplicate_count();
        self.diagnostics
    }

    /// Creates a component node for each component not yet in the graph.
    pub fn ingest_components(&mut self, components: &[RawComponent]) {
        for component in components {
            let id = normalize_id(&component.name);
            if self.store.exists(&id) {
                continue;
            }
            self.component_node(&component.name, component.description.as_deref());
            self.diagnostics.components_ingested += 1;
        }
    }

    /// Adds issue nodes, their component edges, and their tracked links.
    pub fn ingest_static_issues(&mut self, issues: &[RawIssue]) {
        let start = Instant::now();
        let before_nodes = self.store.node_count();
        let before_edges = self.store.edge_count();

        for issue in issues {
            let category = self.classify(issue.type_name());
            let id = normalize_id(&issue.key);

            let mut node = Node::new(&id, &issue.fields.summary, &category);
            node.description = issue.fields.description.clone().unwrap_or_default();
            node.component = issue.first_component().unwrap_or_default().to_string();
            node.status = issue
                .fields
                .status
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_default();
            if category == Category::Thread {
                if let Some(field) = &self.thread_finish_field {
                    node.finish_date = issue.custom_str(field).unwrap_or_default().to_string();
                }
            }
            self.store.add(node);
            self.diagnostics.issues_ingested += 1;

            for component in &issue.fields.components {
                self.component_edge(&id, &category, &component.name);
            }

            for link in &issue.fields.issuelinks {
                self.static_link(&issue.key, &id, &category, link);
            }
        }

        info!(
            nodes = self.store.node_count() - before_nodes,
            edges = self.store.edge_count() - before_edges,
            "Add static issues took {:?}",
            start.elapsed()
        );
    }

    /// Adds the sprint node.
    pub fn ingest_sprint(&mut self, sprint: &RawSprint) {
        let mut node = Node::new(sprint.id.to_string(), &sprint.name, &Category::Sprint);
        node.status = sprint.state.clone();
        node.start_date = sprint.start_date.clone().unwrap_or_default();
        node.finish_date = sprint.end_date.clone().unwrap_or_default();
        self.store.add(node);
        self.diagnostics.sprints_ingested += 1;
    }

    /// Records the dependencies of a sprint on one of its issues.
    ///
    /// Creates sprint edges to the issue itself, to tracked issues it links
    /// to, and to processes named by its labels. Edges are keyed by
    /// `{entity}_SPRINT_{sprint}`; a repeated key appends a description line.
    pub fn ingest_sprint_issue(&mut self, sprint: &RawSprint, issue: &RawIssue) {
        let sprint_id = sprint.id.to_string();
        let category = self.classify(issue.type_name());

        if category.is_tracked() {
            let kind = self.taxonomy.dependency_type_for(&category).to_string();
            self.aggregate(
                Edge::new(
                    format!("{}_SPRINT_{}", issue.key, sprint_id),
                    &sprint_id,
                    &issue.key,
                    kind,
                ),
                format!("Issue {}", issue.key),
                EndpointHints::new(Category::Sprint, category.clone()),
            );
        }

        for link in &issue.fields.issuelinks {
            let Some((linked, label)) = link.linked() else {
                debug!(issue = %issue.key, link = %link.id, "Link has no linked issue");
                self.diagnostics.untracked_links += 1;
                continue;
            };
            if !self.taxonomy.is_tracked_link(label) {
                debug!(issue = %issue.key, link = %link.id, label, "Untracked link type");
                self.diagnostics.untracked_links += 1;
                continue;
            }
            let linked_category = self.taxonomy.classify_issue_type(linked.type_name());
            if !linked_category.is_tracked() {
                debug!(
                    "Unsure how to capture link between {} ({}) and {} ({}) of type {}",
                    issue.key,
                    issue.type_name(),
                    linked.key,
                    linked.type_name(),
                    label
                );
                self.diagnostics.unsupported_links += 1;
                continue;
            }
            self.aggregate(
                Edge::new(
                    format!("{}_SPRINT_{}", linked.id_or_key(), sprint_id),
                    &sprint_id,
                    &linked.key,
                    label,
                ),
                format!("Issue {} link {}", issue.key, linked.key),
                EndpointHints::new(Category::Sprint, linked_category),
            );
        }

        for label in &issue.fields.labels {
            let Some(process) = self.taxonomy.process_name(label) else {
                continue;
            };
            let kind = self.taxonomy.default_dependency_type().to_string();
            self.aggregate(
                Edge::new(
                    format!("{}_SPRINT_{}", process, sprint_id),
                    &sprint_id,
                    &process,
                    kind,
                ),
                format!("Issue {} process label {}", issue.key, label),
                EndpointHints::new(
                    Category::Sprint,
                    Category::Other(PROCESS_CATEGORY.to_string()),
                ),
            );
        }

        self.diagnostics.sprint_issues_ingested += 1;
    }

    fn classify(&mut self, type_name: &str) -> Category {
        let category = self.taxonomy.classify_issue_type(type_name);
        if !category.is_tracked() {
            *self
                .diagnostics
                .unrecognized_issue_types
                .entry(type_name.to_string())
                .or_default() += 1;
        }
        category
    }

    /// Returns the component node id, creating the node when absent.
    fn component_node(&mut self, name: &str, description: Option<&str>) -> String {
        let id = normalize_id(name);
        if !self.store.exists(&id) {
            let mut node = Node::new(&id, name, &Category::Component);
            node.description = description.unwrap_or_default().to_string();
            self.store.add(node);
        }
        id
    }

    fn component_edge(&mut self, issue_id: &str, category: &Category, component: &str) {
        let component_id = self.component_node(component, None);
        let edge = Edge::new(
            format!("{}_COMPONENT_{}", issue_id, component_id),
            issue_id,
            &component_id,
            self.taxonomy.default_dependency_type(),
        );
        self.store.add_edge(
            edge,
            EndpointHints::new(category.clone(), Category::Component),
        );
    }

    fn static_link(&mut self, key: &str, issue_id: &str, category: &Category, link: &RawLink) {
        let Some((linked, label)) = link.linked() else {
            debug!(issue = key, link = %link.id, "Link has no linked issue");
            self.diagnostics.untracked_links += 1;
            return;
        };
        if !self.taxonomy.is_tracked_link(label) {
            debug!(issue = key, link = %link.id, label, "Untracked link type");
            self.diagnostics.untracked_links += 1;
            return;
        }
        let linked_category = self.taxonomy.classify_issue_type(linked.type_name());
        if !linked_category.is_tracked() {
            debug!(
                issue = key,
                linked = %linked.key,
                linked_type = linked.type_name(),
                "Link to unsupported issue type"
            );
            self.diagnostics.unsupported_links += 1;
            return;
        }

        let id = normalize_id(&link.id);
        if self.store.exists(&id) {
            // Links are reported from both ends
            self.diagnostics.mirrored_links += 1;
            return;
        }

        let (source, source_category) = match &link.outward_issue {
            Some(outward) => (
                outward.key.as_str(),
                self.taxonomy.classify_issue_type(outward.type_name()),
            ),
            None => (issue_id, category.clone()),
        };
        let (target, target_category) = match &link.inward_issue {
            Some(inward) => (
                inward.key.as_str(),
                self.taxonomy.classify_issue_type(inward.type_name()),
            ),
            None => (issue_id, category.clone()),
        };

        let mut edge = Edge::new(id, source, target, label);
        if let Some(comment) = &link.comment {
            edge.description = comment.body.clone();
        }
        self.store
            .add_edge(edge, EndpointHints::new(source_category, target_category));
    }

    fn aggregate(&mut self, edge: Edge, line: String, hints: EndpointHints) {
        let id = normalize_id(&edge.id);
        if self.store.exists(&id) {
            self.store.append_description(&id, &line);
            self.diagnostics.aggregated_descriptions += 1;
        } else {
            self.store.add_edge(edge.with_description(line), hints);
        }
    }
}
