// Rust guideline compliant 2026-10-16

//! Unit tests for the persisted graph document.

use tempfile::TempDir;
use tracegraph_core::document::{ItemData, WireItem};
use tracegraph_core::{Category, Document, Edge, Error, GraphItem, GraphStore, Node};

fn sample_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add(Node::new("PIR-1", "Login", &Category::Feature));
    store.add(Edge::new("500", "PIR-2", "PIR-1", "depends on"));
    store.add(Node::new("PIR-2", "Auth", &Category::Requirement));
    store.add(Edge::new("501", "PIR-1", "UI", "depends on").with_description("Issue PIR-1"));
    store
}

#[test]
fn test_edges_written_before_nodes() {
    let document = Document::from_store(&sample_store());
    let ids: Vec<(&str, &str)> = document
        .graph
        .iter()
        .map(|item| match item {
            WireItem::Edge(data) => ("edges", data.id.as_str()),
            WireItem::Node(data) => ("nodes", data.id.as_str()),
        })
        .collect();
    assert_eq!(
        ids,
        vec![
            ("edges", "500"),
            ("edges", "501"),
            ("nodes", "PIR-1"),
            ("nodes", "PIR-2"),
        ]
    );
}

#[test]
fn test_exact_json_omits_empty_fields() {
    let mut store = GraphStore::new();
    store.add(Node::new("PIR-1", "Login", &Category::Feature));
    store.add(Edge::new("500", "PIR-2", "PIR-1", "depends on"));

    let json = Document::from_store(&store).to_json().unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"graph":["#,
            r#"{"group":"edges","data":{"id":"500","source":"PIR-2","target":"PIR-1","type":"depends on"}},"#,
            r#"{"group":"nodes","data":{"id":"PIR-1","label":"Login","type":"feature"}}"#,
            r#"]}"#
        )
    );
}

#[test]
fn test_node_fields_serialized() {
    let mut node = Node::new("7", "Sprint 7", &Category::Sprint);
    node.status = "active".to_string();
    node.start_date = "2018-03-05T10:00:00+00:00".to_string();
    node.finish_date = "2018-03-19T10:00:00+00:00".to_string();
    let mut store = GraphStore::new();
    store.add(node);

    let value: serde_json::Value =
        serde_json::from_str(&Document::from_store(&store).to_json().unwrap()).unwrap();
    let data = &value["graph"][0]["data"];
    assert_eq!(data["status"], "active");
    assert_eq!(data["start_date"], "2018-03-05T10:00:00+00:00");
    assert_eq!(data["finish_date"], "2018-03-19T10:00:00+00:00");
    assert!(data.get("component").is_none());
    assert!(data.get("degree").is_none());
}

#[test]
fn test_reload_preserves_items() {
    let store = sample_store();
    let json = Document::from_store(&store).to_json().unwrap();

    let reloaded = Document::from_json(&json).unwrap().into_store().unwrap();
    assert_eq!(reloaded.len(), store.len());
    for item in store.items() {
        assert_eq!(reloaded.get(item.id()), Some(item));
    }
}

#[test]
fn test_reserved_fields_accepted_on_load() {
    let json = r#"{"graph":[
        {"group":"nodes","data":{"id":"A","label":"A","parent":"P","degree":3,"version":"2","type":"feature"}},
        {"group":"edges","data":{"id":"E","source":"A","target":"A","from":"x","to":"y","type":"traces to"}}
    ]}"#;
    let document = Document::from_json(json).unwrap();
    match &document.graph[0] {
        WireItem::Node(data) => {
            assert_eq!(data.parent, "P");
            assert_eq!(data.degree, 3);
        }
        WireItem::Edge(_) => panic!("expected a node"),
    }

    let store = document.into_store().unwrap();
    assert_eq!(store.node_count(), 1);
    assert_eq!(store.edge_count(), 1);
    let edge = store.get("E").and_then(GraphItem::as_edge).unwrap();
    assert_eq!(edge.kind, "traces to");
}

#[test]
fn test_item_without_id_rejected() {
    let document = Document {
        graph: vec![WireItem::Node(ItemData {
            label: "nameless".to_string(),
            ..ItemData::default()
        })],
    };
    assert!(matches!(
        document.into_store(),
        Err(Error::InvalidDocument(_))
    ));
}

#[test]
fn test_unknown_group_rejected() {
    let json = r#"{"graph":[{"group":"widgets","data":{"id":"A"}}]}"#;
    assert!(Document::from_json(json).is_err());
}

#[test]
fn test_save_overwrites_and_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("output.json");
    std::fs::write(&path, "stale").unwrap();

    let document = Document::from_store(&sample_store());
    document.save(&path).unwrap();

    let loaded = Document::load(&path).unwrap();
    assert_eq!(loaded, document);
    assert_eq!(loaded.len(), 4);
}

#[test]
fn test_empty_store_document() {
    let document = Document::from_store(&GraphStore::new());
    assert!(document.is_empty());
    assert_eq!(document.to_json().unwrap(), r#"{"graph":[]}"#);
}
