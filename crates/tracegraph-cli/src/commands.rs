// Rust guideline compliant 2026-10-16

//! Command implementations for the Tracegraph CLI.

pub mod config;
pub mod extract;
pub mod jql;
pub mod summary;
