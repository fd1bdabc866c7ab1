// Rust guideline compliant 2026-10-16

//! Tracker records and the source boundary.
//!
//! The record types mirror the tracker's REST payloads closely enough that a
//! decoded response (or a saved dump of one) deserializes directly. Every
//! optional field defaults, so sparse payloads never fail to decode.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named tracker value such as an issue type or status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Named {
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl Named {
    /// Creates a named value.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Issue as returned by search or sprint queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    /// Tracker-internal numeric id.
    #[serde(default)]
    pub id: String,
    /// Human key, e.g. `PIR-12`.
    pub key: String,
    /// Issue fields.
    #[serde(default)]
    pub fields: RawIssueFields,
}

/// Field payload of a [`RawIssue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIssueFields {
    /// One-line summary.
    #[serde(default)]
    pub summary: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Issue type.
    #[serde(default)]
    pub issuetype: Named,
    /// Workflow status.
    #[serde(default)]
    pub status: Option<Named>,
    /// Components the issue belongs to.
    #[serde(default)]
    pub components: Vec<Named>,
    /// Free-form labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Links to other issues.
    #[serde(default)]
    pub issuelinks: Vec<RawLink>,
    /// Custom fields and anything else the tracker sent.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl RawIssue {
    /// Issue type name.
    pub fn type_name(&self) -> &str {
        &self.fields.issuetype.name
    }

    /// Name of the first component, if any.
    pub fn first_component(&self) -> Option<&str> {
        self.fields.components.first().map(|c| c.name.as_str())
    }

    /// A custom field's value when it is a string.
    pub fn custom_str(&self, field: &str) -> Option<&str> {
        self.fields.extra.get(field).and_then(|v| v.as_str())
    }
}

/// Issue link as embedded in an issue.
///
/// A link is reported on both of its issues. On each side exactly one of
/// `inward_issue` / `outward_issue` is normally present: the other end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLink {
    /// Stable link id, identical on both sides.
    pub id: String,
    /// Link type with its directional labels.
    #[serde(rename = "type", default)]
    pub link_type: RawLinkType,
    /// Issue on the inward side.
    #[serde(rename = "inwardIssue", default, skip_serializing_if = "Option::is_none")]
    pub inward_issue: Option<LinkedIssue>,
    /// Issue on the outward side.
    #[serde(rename = "outwardIssue", default, skip_serializing_if = "Option::is_none")]
    pub outward_issue: Option<LinkedIssue>,
    /// Optional link comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<RawComment>,
}

impl RawLink {
    /// The issue at the other end of the link and the label read from this side.
    ///
    /// An embedded inward issue wins over an outward one, and its label is
    /// the link type's `inward` text.
    pub fn linked(&self) -> Option<(&LinkedIssue, &str)> {
        if let Some(issue) = &self.inward_issue {
            return Some((issue, self.link_type.inward.as_str()));
        }
        self.outward_issue
            .as_ref()
            .map(|issue| (issue, self.link_type.outward.as_str()))
    }
}

/// Link type with inward and outward labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLinkType {
    /// Link type name, e.g. "Dependency".
    #[serde(default)]
    pub name: String,
    /// Label as seen from the inward side.
    #[serde(default)]
    pub inward: String,
    /// Label as seen from the outward side.
    #[serde(default)]
    pub outward: String,
}

/// Abbreviated issue embedded in a link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedIssue {
    /// Tracker-internal numeric id.
    #[serde(default)]
    pub id: String,
    /// Human key.
    pub key: String,
    /// Abbreviated fields.
    #[serde(default)]
    pub fields: LinkedIssueFields,
}

impl LinkedIssue {
    /// Issue type name.
    pub fn type_name(&self) -> &str {
        &self.fields.issuetype.name
    }

    /// The tracker id, or the key when no id was sent.
    pub fn id_or_key(&self) -> &str {
        if self.id.is_empty() {
            &self.key
        } else {
            &self.id
        }
    }
}

/// Fields of a [`LinkedIssue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedIssueFields {
    /// Issue type.
    #[serde(default)]
    pub issuetype: Named,
}

/// Link comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawComment {
    /// Comment text.
    #[serde(default)]
    pub body: String,
}

/// One page of an issue search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePage {
    /// Offset of the first issue.
    #[serde(default)]
    pub start_at: usize,
    /// Page size the tracker applied.
    #[serde(default)]
    pub max_results: usize,
    /// Total matching issues.
    #[serde(default)]
    pub total: usize,
    /// Issues on this page.
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// Agile board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBoard {
    /// Board id.
    pub id: u64,
    /// Board name.
    #[serde(default)]
    pub name: String,
    /// Board type, `scrum` or `kanban`.
    #[serde(rename = "type", default)]
    pub board_type: String,
    /// Owning project, when the tracker reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
}

impl RawBoard {
    /// Kanban boards have no sprints.
    pub fn is_kanban(&self) -> bool {
        self.board_type.eq_ignore_ascii_case("kanban")
    }
}

/// One page of a board listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPage {
    /// Offset of the first board.
    #[serde(default)]
    pub start_at: usize,
    /// Page size the tracker applied.
    #[serde(default)]
    pub max_results: usize,
    /// Total boards.
    #[serde(default)]
    pub total: usize,
    /// Boards on this page.
    #[serde(default)]
    pub values: Vec<RawBoard>,
}

/// Sprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSprint {
    /// Numeric sprint id.
    pub id: u64,
    /// Sprint name.
    #[serde(default)]
    pub name: String,
    /// `future`, `active` or `closed`.
    #[serde(default)]
    pub state: String,
    /// Planned start.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Planned end.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Project component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawComponent {
    /// Component name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Supplier of decoded tracker records.
///
/// Implementations own transport, authentication and decoding. Any error
/// returned here aborts the extraction run; nothing is retried.
pub trait TrackerSource {
    /// One page of issues matching `jql`.
    fn search_issues(&self, jql: &str, start_at: usize, max_results: usize) -> Result<IssuePage>;

    /// One page of the boards of `project`.
    fn boards(&self, project: &str, start_at: usize, max_results: usize) -> Result<BoardPage>;

    /// All sprints of a board.
    fn sprints(&self, board_id: u64) -> Result<Vec<RawSprint>>;

    /// All issues in a sprint.
    fn sprint_issues(&self, sprint_id: u64) -> Result<Vec<RawIssue>>;

    /// Components of `project`.
    fn components(&self, project: &str) -> Result<Vec<RawComponent>>;
}
