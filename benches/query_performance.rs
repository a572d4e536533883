//! Query Performance Benchmarks
//!
//! Measures annotation query throughput over a store of passage-level
//! annotations spread across a synthetic three-level citation hierarchy.
//!
//! Run with: `cargo bench --bench query_performance`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nemo_query::annotations::{AnnotationStore, AnnotationStoreBuilder, QueryOptions};
use nemo_query::text::{CitationScheme, InMemoryTextProvider, Text};

const BASE: &str = "urn:cts:latinLit:phi1294.phi002.perseus-lat2";

/// Three-level synthetic text: 10 books x 10 poems x 10 lines
fn build_provider() -> InMemoryTextProvider {
    let text = Text::new(
        BASE.parse().unwrap(),
        CitationScheme::from_names(&["book", "poem", "line"]),
    );

    let mut leaves = Vec::new();
    for book in 1..=10 {
        for poem in 1..=10 {
            for line in 1..=10 {
                leaves.push(format!("{}.{}.{}", book, poem, line));
            }
        }
    }

    let mut provider = InMemoryTextProvider::new();
    provider.insert(text, leaves);
    provider
}

/// One poem-level annotation per poem, alternating types
fn build_store(provider: &InMemoryTextProvider) -> AnnotationStore {
    let mut builder = AnnotationStoreBuilder::new();
    for book in 1..=10 {
        for poem in 1..=10 {
            let type_uri = if poem % 2 == 0 { "dc:image" } else { "dc:treebank" };
            builder
                .add(
                    &format!("{}:{}.{}", BASE, book, poem),
                    &format!("resources/{}-{}.xml", book, poem),
                    type_uri,
                )
                .unwrap();
        }
    }
    builder.process(provider)
}

fn bench_exact_query(c: &mut Criterion) {
    let provider = build_provider();
    let store = build_store(&provider);
    let urn = format!("{}:5.5", BASE);
    let options = QueryOptions::default();

    c.bench_function("query_exact", |b| {
        b.iter(|| {
            let result = store.query(&provider, Some(&[black_box(urn.as_str())]), &options);
            black_box(result)
        })
    });
}

fn bench_range_query(c: &mut Criterion) {
    let provider = build_provider();
    let store = build_store(&provider);
    let urn = format!("{}:3.1-7.10", BASE);
    let options = QueryOptions::default();

    c.bench_function("query_range", |b| {
        b.iter(|| {
            let result = store.query(&provider, Some(&[black_box(urn.as_str())]), &options);
            black_box(result)
        })
    });
}

fn bench_match_all(c: &mut Criterion) {
    let provider = build_provider();
    let store = build_store(&provider);
    let options = QueryOptions::default();

    c.bench_function("query_all", |b| {
        b.iter(|| {
            let result = store.query(&provider, black_box(None), &options);
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_exact_query, bench_range_query, bench_match_all);
criterion_main!(benches);
