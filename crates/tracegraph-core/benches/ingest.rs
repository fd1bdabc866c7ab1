// Rust guideline compliant 2026-10-16

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tracegraph_core::source::{
    LinkedIssue, LinkedIssueFields, Named, RawIssue, RawIssueFields, RawLink, RawLinkType,
    RawSprint,
};
use tracegraph_core::{integrity, Config, Document, GraphBuilder, GraphStore, TypeTaxonomy};

/// Issues cycling through the tracked types, each depending on its predecessor.
fn build_issues(count: usize) -> Vec<RawIssue> {
    let types = ["New Capability", "New Feature", "Requirement", "Thread"];
    (0..count)
        .map(|i| {
            let mut issue = RawIssue {
                id: (10_000 + i).to_string(),
                key: format!("PIR-{}", i),
                fields: RawIssueFields {
                    summary: format!("Issue {}", i),
                    issuetype: Named::new(types[i % types.len()]),
                    components: vec![Named::new(format!("Component {}", i % 10))],
                    labels: vec![format!("process_step{}", i % 3)],
                    ..RawIssueFields::default()
                },
            };
            if i > 0 {
                issue.fields.issuelinks.push(RawLink {
                    id: format!("L{}", i),
                    link_type: RawLinkType {
                        name: "Dependency".to_string(),
                        inward: "is a dependency of".to_string(),
                        outward: "depends on".to_string(),
                    },
                    outward_issue: Some(LinkedIssue {
                        id: (10_000 + i - 1).to_string(),
                        key: format!("PIR-{}", i - 1),
                        fields: LinkedIssueFields {
                            issuetype: Named::new(types[(i - 1) % types.len()]),
                        },
                    }),
                    ..RawLink::default()
                });
            }
            issue
        })
        .collect()
}

fn build_store(issues: &[RawIssue], taxonomy: &TypeTaxonomy) -> GraphStore {
    let mut store = GraphStore::new();
    let sprint = RawSprint {
        id: 7,
        name: "Sprint 7".to_string(),
        ..RawSprint::default()
    };
    let mut builder = GraphBuilder::new(&mut store, taxonomy);
    builder.ingest_static_issues(issues);
    builder.ingest_sprint(&sprint);
    for issue in issues {
        builder.ingest_sprint_issue(&sprint, issue);
    }
    builder.finish();
    store
}

fn bench_ingest(c: &mut Criterion) {
    let taxonomy = TypeTaxonomy::from_config(&Config::default());
    let issues = build_issues(1000);
    c.bench_function("ingest_1000", |b| {
        b.iter(|| black_box(build_store(&issues, &taxonomy)))
    });
}

fn bench_repair(c: &mut Criterion) {
    let taxonomy = TypeTaxonomy::from_config(&Config::default());
    let store = build_store(&build_issues(1000), &taxonomy);
    c.bench_function("repair_1000", |b| {
        b.iter_batched(
            || store.clone(),
            |mut store| black_box(integrity::repair(&mut store)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_document(c: &mut Criterion) {
    let taxonomy = TypeTaxonomy::from_config(&Config::default());
    let store = build_store(&build_issues(1000), &taxonomy);
    c.bench_function("document_json_1000", |b| {
        b.iter(|| black_box(Document::from_store(&store).to_json()))
    });
}

criterion_group!(benches, bench_ingest, bench_repair, bench_document);
criterion_main!(benches);
