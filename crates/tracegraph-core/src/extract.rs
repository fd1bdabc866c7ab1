// Rust guideline compliant 2026-10-16

//! The extraction pipeline.
//!
//! Pulls records from a [`TrackerSource`] strictly in sequence (components,
//! static-issue pages, then boards, sprints and sprint issues), feeds them to
//! the [`GraphBuilder`], and finishes with one integrity pass and a summary.
//! Any source error aborts the run; nothing is retried and no partial graph
//! is returned.

use crate::integrity::{self, IntegrityReport};
use crate::query::build_jql;
use crate::source::{RawSprint, TrackerSource};
use crate::summary::{log_summary, Histogram};
use crate::{Config, Diagnostics, GraphBuilder, GraphStore, Result, TypeTaxonomy};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

/// Everything produced by one run.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The finished graph.
    pub store: GraphStore,
    /// Ingestion counters.
    pub diagnostics: Diagnostics,
    /// Result of the integrity policy.
    pub integrity: IntegrityReport,
    /// Per-type counts after the integrity pass.
    pub histogram: Histogram,
}

/// Runs a full extraction against `source`.
///
/// # Errors
///
/// Returns the first error raised by the source.
pub fn run(source: &dyn TrackerSource, config: &Config) -> Result<Extraction> {
    let taxonomy = TypeTaxonomy::from_config(config);
    let mut store = GraphStore::new();

    let diagnostics = {
        let mut builder = GraphBuilder::new(&mut store, &taxonomy)
            .with_thread_finish_field(&config.thread_finish_field);
        load_components(source, config, &mut builder)?;
        load_static_issues(source, config, &mut builder)?;
        load_sprints(source, config, &mut builder)?;
        builder.finish()
    };
    diagnostics.log();

    info!(policy = %config.integrity, "Applying integrity policy");
    let integrity = integrity::apply(config.integrity, &mut store);
    let histogram = log_summary(&store);

    Ok(Extraction {
        store,
        diagnostics,
        integrity,
        histogram,
    })
}

fn load_components(
    source: &dyn TrackerSource,
    config: &Config,
    builder: &mut GraphBuilder<'_>,
) -> Result<()> {
    let start = Instant::now();
    for project in &config.projects {
        let components = source.components(project)?;
        debug!(project = %project, count = components.len(), "Loaded components");
        builder.ingest_components(&components);
    }
    info!("Load components took {:?}", start.elapsed());
    Ok(())
}

fn load_static_issues(
    source: &dyn TrackerSource,
    config: &Config,
    builder: &mut GraphBuilder<'_>,
) -> Result<()> {
    let start = Instant::now();
    let jql = build_jql(
        config.projects.as_slice(),
        config.tracked_issue_types().as_slice(),
    );
    debug!(jql = %jql, "Static issue query");

    let mut start_at = 0;
    loop {
        let page = source.search_issues(&jql, start_at, config.page_size)?;
        if start_at == 0 {
            info!(total = page.total, "Identified static issues");
        }
        builder.ingest_static_issues(&page.issues);

        let next = page.start_at + page.max_results;
        // A zero-sized page would never advance
        if page.max_results == 0 || page.total <= next {
            break;
        }
        start_at = next;
    }
    info!("Load static issues took {:?}", start.elapsed());
    Ok(())
}

fn load_sprints(
    source: &dyn TrackerSource,
    config: &Config,
    builder: &mut GraphBuilder<'_>,
) -> Result<()> {
    let start = Instant::now();
    let sprints = collect_sprints(source, config)?;
    info!(count = sprints.len(), "Scrum sprints found");

    for sprint in sprints.values() {
        builder.ingest_sprint(sprint);
        let issues = source.sprint_issues(sprint.id)?;
        info!(sprint = %sprint.name, count = issues.len(), "Loading sprint issues");
        for issue in &issues {
            builder.ingest_sprint_issue(sprint, issue);
        }
    }
    info!("Load sprints took {:?}", start.elapsed());
    Ok(())
}

/// Sprints of every non-kanban board, keyed (and so deduplicated) by id.
fn collect_sprints(
    source: &dyn TrackerSource,
    config: &Config,
) -> Result<BTreeMap<u64, RawSprint>> {
    let mut sprints = BTreeMap::new();
    for project in &config.projects {
        let mut start_at = 0;
        loop {
            let page = source.boards(project, start_at, config.page_size)?;
            for board in &page.values {
                if board.is_kanban() {
                    debug!(board = %board.name, id = board.id, "Skipping kanban board");
                    continue;
                }
                debug!(board = %board.name, id = board.id, kind = %board.board_type, "Board");
                for sprint in source.sprints(board.id)? {
                    debug!(sprint = %sprint.name, "Sprint");
                    sprints.insert(sprint.id, sprint);
                }
            }

            let next = page.start_at + page.max_results;
            if page.max_results == 0 || page.total <= next {
                break;
            }
            start_at = next;
        }
    }
    Ok(sprints)
}
