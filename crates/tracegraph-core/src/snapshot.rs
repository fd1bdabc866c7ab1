// Rust guideline compliant 2026-10-16

//! File-backed tracker source.
//!
//! A snapshot is one JSON file holding decoded tracker payloads:
//!
//! ```json
//! {
//!   "components": { "PIR": [ { "name": "UI" } ] },
//!   "issues": [ { "key": "PIR-1", "fields": { ... } } ],
//!   "boards": [ { "id": 1, "name": "Team", "type": "scrum", "projectKey": "PIR" } ],
//!   "sprints": { "1": [ { "id": 7, "name": "Sprint 7", "state": "active" } ] },
//!   "sprint_issues": { "7": [ { "key": "PIR-1", "fields": { ... } } ] }
//! }
//! ```
//!
//! Issues and boards are paged the way the tracker pages them. Of the search
//! query only the issue-type clause is honored; the project clause is not,
//! so a snapshot is expected to hold the configured projects only.

use crate::query::issue_types_in;
use crate::source::{
    BoardPage, IssuePage, RawBoard, RawComponent, RawIssue, RawSprint, TrackerSource,
};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Tracker data captured in a single JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSource {
    /// Components per project key.
    #[serde(default)]
    pub components: HashMap<String, Vec<RawComponent>>,
    /// Issues returned by the static search.
    #[serde(default)]
    pub issues: Vec<RawIssue>,
    /// All boards.
    #[serde(default)]
    pub boards: Vec<RawBoard>,
    /// Sprints per board id.
    #[serde(default)]
    pub sprints: HashMap<u64, Vec<RawSprint>>,
    /// Issues per sprint id.
    #[serde(default)]
    pub sprint_issues: HashMap<u64, Vec<RawIssue>>,
}

impl SnapshotSource {
    /// Reads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Writes the snapshot as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Returns `items[start_at..start_at + max_results]`, clamped.
fn page<T: Clone>(items: &[T], start_at: usize, max_results: usize) -> Vec<T> {
    items
        .iter()
        .skip(start_at)
        .take(max_results)
        .cloned()
        .collect()
}

impl TrackerSource for SnapshotSource {
    fn search_issues(&self, jql: &str, start_at: usize, max_results: usize) -> Result<IssuePage> {
        let issues: Vec<RawIssue> = match issue_types_in(jql) {
            Some(types) => self
                .issues
                .iter()
                .filter(|issue| {
                    types
                        .iter()
                        .any(|t| t.eq_ignore_ascii_case(issue.type_name()))
                })
                .cloned()
                .collect(),
            None => self.issues.clone(),
        };
        Ok(IssuePage {
            start_at,
            max_results,
            total: issues.len(),
            issues: page(&issues, start_at, max_results),
        })
    }

    fn boards(&self, project: &str, start_at: usize, max_results: usize) -> Result<BoardPage> {
        let boards: Vec<RawBoard> = self
            .boards
            .iter()
            .filter(|b| b.project_key.as_deref().map_or(true, |p| p == project))
            .cloned()
            .collect();
        Ok(BoardPage {
            start_at,
            max_results,
            total: boards.len(),
            values: page(&boards, start_at, max_results),
        })
    }

    fn sprints(&self, board_id: u64) -> Result<Vec<RawSprint>> {
        Ok(self.sprints.get(&board_id).cloned().unwrap_or_default())
    }

    fn sprint_issues(&self, sprint_id: u64) -> Result<Vec<RawIssue>> {
        Ok(self.sprint_issues.get(&sprint_id).cloned().unwrap_or_default())
    }

    fn components(&self, project: &str) -> Result<Vec<RawComponent>> {
        Ok(self.components.get(project).cloned().unwrap_or_default())
    }
}
