// Rust guideline compliant 2026-10-16

//! Integration tests for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracegraph_cli::commands;
use tracegraph_cli::create_formatter;
use tracegraph_core::{Config, Document, GraphItem};

const SNAPSHOT: &str = r#"{
    "components": { "PIR": [ { "name": "UI" } ] },
    "issues": [
        {
            "id": "10001",
            "key": "PIR-1",
            "fields": {
                "summary": "Login",
                "issuetype": { "name": "New Feature" },
                "components": [ { "name": "UI" } ],
                "issuelinks": [ {
                    "id": "500",
                    "type": { "name": "Dependency", "inward": "is a dependency of", "outward": "depends on" },
                    "outwardIssue": { "id": "10002", "key": "PIR-2", "fields": { "issuetype": { "name": "Requirement" } } }
                } ]
            }
        },
        {
            "id": "10002",
            "key": "PIR-2",
            "fields": { "summary": "Auth", "issuetype": { "name": "Requirement" } }
        }
    ],
    "boards": [ { "id": 1, "name": "Team", "type": "scrum" } ],
    "sprints": { "1": [ { "id": 7, "name": "Sprint 7", "state": "active" } ] },
    "sprint_issues": {
        "7": [ {
            "id": "10001",
            "key": "PIR-1",
            "fields": { "summary": "Login", "issuetype": { "name": "New Feature" }, "labels": ["process_build"] }
        } ]
    }
}"#;

/// Helper to write the sample snapshot into a temp directory.
fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("snapshot.json");
    fs::write(&path, SNAPSHOT).expect("Failed to write snapshot");
    path
}

#[test]
fn test_extract_writes_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let snapshot = write_snapshot(temp_dir.path());
    let out = temp_dir.path().join("graph.json");

    let extraction = commands::extract::run(&Config::default(), &snapshot, &out)
        .expect("Extraction failed");

    let store = Document::load(&out)
        .expect("Failed to read document")
        .into_store()
        .expect("Invalid document");
    assert_eq!(store.len(), extraction.store.len());
    assert!(store.exists("PIR-1_SPRINT_7"));
    let edge = store.get("500").and_then(GraphItem::as_edge).unwrap();
    assert_eq!(edge.source, "PIR-2");
    assert_eq!(edge.target, "PIR-1");

    // Edges lead the document
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with(r#"{"graph":[{"group":"edges""#));
}

#[test]
fn test_extract_integrity_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let snapshot = write_snapshot(temp_dir.path());
    let out = temp_dir.path().join("graph.json");
    let formatter = create_formatter(false);

    let written = commands::extract::execute(
        Config::default(),
        &snapshot,
        Some(out.clone()),
        Some("repair".to_string()),
        formatter.as_ref(),
    )
    .expect("Extraction failed");
    assert_eq!(written, out);

    let store = Document::load(&out).unwrap().into_store().unwrap();
    let placeholder = store.get("build").and_then(GraphItem::as_node).unwrap();
    assert_eq!(placeholder.kind, "process");
}

#[test]
fn test_extract_rejects_bad_policy() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let snapshot = write_snapshot(temp_dir.path());
    let formatter = create_formatter(false);

    let result = commands::extract::execute(
        Config::default(),
        &snapshot,
        Some(temp_dir.path().join("graph.json")),
        Some("fix".to_string()),
        formatter.as_ref(),
    );
    assert!(result.is_err());
    assert!(!temp_dir.path().join("graph.json").exists());
}

#[test]
fn test_extract_missing_snapshot_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out = temp_dir.path().join("graph.json");

    let result = commands::extract::run(
        &Config::default(),
        &temp_dir.path().join("missing.json"),
        &out,
    );

    let err = result.expect_err("Missing snapshot should fail");
    assert!(err.to_string().contains("Failed to load snapshot"));
    assert!(!out.exists());
}

#[test]
fn test_summary_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let snapshot = write_snapshot(temp_dir.path());
    let out = temp_dir.path().join("graph.json");
    commands::extract::run(&Config::default(), &snapshot, &out).unwrap();

    let formatter = create_formatter(false);
    let output = commands::summary::render(&out, formatter.as_ref()).unwrap();

    assert!(output.contains("feature"));
    assert!(output.contains("requirement"));
    assert!(output.contains("sprint"));
    assert!(output.contains("Integrity: "));
    assert!(output.contains("build_SPRINT_7: missing target build"));
}

#[test]
fn test_summary_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let snapshot = write_snapshot(temp_dir.path());
    let out = temp_dir.path().join("graph.json");
    commands::extract::run(&Config::default(), &snapshot, &out).unwrap();

    let formatter = create_formatter(true);
    let output = commands::summary::render(&out, formatter.as_ref()).unwrap();

    assert!(output.contains("\"node_total\": 4"));
    assert!(output.contains("\"edge_total\": 4"));
}

#[test]
fn test_summary_rejects_malformed_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("graph.json");
    fs::write(&path, "{\"graph\": 3}").unwrap();

    let formatter = create_formatter(false);
    assert!(commands::summary::render(&path, formatter.as_ref()).is_err());
}

#[test]
fn test_jql_for_default_config() {
    assert_eq!(
        commands::jql::render(&Config::default()),
        "project = PIR AND issuetype in ('New Capability','New Feature','Requirement','Thread')"
    );
}

#[test]
fn test_jql_multiple_projects() {
    let config = Config {
        projects: vec!["PIR".to_string(), "OPS".to_string()],
        ..Config::default()
    };
    assert!(commands::jql::render(&config).starts_with("project IN (PIR,OPS) AND"));
}

#[test]
fn test_config_write() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("tracegraph.toml");

    commands::config::execute(&Config::default(), Some(path.as_path()))
        .expect("Failed to write config");

    let content = fs::read_to_string(&path).expect("Failed to read config");
    assert!(content.contains("thread_finish_field"));
    assert!(content.contains("integrity = \"report\""));
}
