use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;
use treepath_core::{collapse_all, evaluate_filter, FilterPipeline};

/// A wide document: 1000 users with nested address objects and tag arrays.
fn wide_document() -> Value {
    let users: Vec<Value> = (0..1000)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("user-{}", i),
                "address": {"city": "Oslo", "zip": format!("{:04}", i)},
                "tags": ["a", "b", "c"],
            })
        })
        .collect();
    json!({"users": users, "meta": {"count": 1000}})
}

fn bench_filters(c: &mut Criterion) {
    let doc = wide_document();

    c.bench_function("index_lookup", |b| {
        b.iter(|| evaluate_filter(black_box(&doc), ".users[500].address.city"))
    });

    c.bench_function("iterate_project", |b| {
        b.iter(|| evaluate_filter(black_box(&doc), ".users[].address.zip"))
    });

    c.bench_function("iterate_pipeline", |b| {
        b.iter(|| evaluate_filter(black_box(&doc), ".users[].tags | length"))
    });

    let compiled = FilterPipeline::parse(".users[].name").unwrap();
    c.bench_function("compiled_iterate", |b| {
        b.iter(|| compiled.apply(black_box(&doc)))
    });

    c.bench_function("collapse_all", |b| b.iter(|| collapse_all(black_box(&doc))));
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
