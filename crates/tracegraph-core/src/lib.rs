// Rust guideline compliant 2026-10-16

//! Tracegraph Core Library
//!
//! This crate assembles issue-tracker records into a deduplicated, typed
//! node/edge graph:
//! - Identifier normalization and type taxonomy
//! - Graph store with the deduplication invariant
//! - Graph builder for components, issues, sprints and sprint issues
//! - Integrity checking (report, repair, trim) and per-type summaries
//! - The persisted JSON document
//! - The tracker source boundary, a snapshot source, and the extraction pipeline

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod integrity;
pub mod models;
pub mod normalize;
pub mod query;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod summary;
pub mod taxonomy;

pub use builder::{Diagnostics, GraphBuilder};
pub use config::Config;
pub use document::Document;
pub use error::{Error, Result};
pub use extract::Extraction;
pub use integrity::{IntegrityPolicy, IntegrityReport};
pub use models::{Edge, EndpointHints, GraphItem, Group, Node};
pub use normalize::normalize_id;
pub use query::build_jql;
pub use snapshot::SnapshotSource;
pub use source::TrackerSource;
pub use store::GraphStore;
pub use summary::Histogram;
pub use taxonomy::{Category, LinkKind, TypeTaxonomy};
