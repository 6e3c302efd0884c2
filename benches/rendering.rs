use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use snapfmt::{render, render_value, to_value};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn benchmark_render_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("render_simple_struct", |b| {
        b.iter(|| render(black_box(&user)))
    });
}

fn benchmark_render_wide_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_wide_map");

    for size in [10, 50, 100, 500].iter() {
        let entries: std::collections::BTreeMap<String, u32> =
            (0..*size).map(|i| (format!("key{:04}", i), i)).collect();
        let value = to_value(&entries).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| render_value(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_render_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    };

    c.bench_function("render_nested_struct", |b| b.iter(|| render(black_box(&data))));
}

fn benchmark_render_deep_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_deep_list");

    for depth in [4, 16, 64].iter() {
        let mut value = to_value(&vec![1, 2, 3]).unwrap();
        for _ in 0..*depth {
            value = snapfmt::Value::List(vec![value]);
        }

        group.bench_with_input(BenchmarkId::from_parameter(depth), &value, |b, value| {
            b.iter(|| render_value(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_render_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_strings");

    let plain = "a plain string with nothing to escape in it at all";
    let escaped = "line one\nline two\twith\ttabs and a 'quote' \r\n";

    group.bench_function("plain", |b| b.iter(|| render(black_box(&plain))));
    group.bench_function("escaped", |b| b.iter(|| render(black_box(&escaped))));

    group.finish();
}

fn benchmark_scrub(c: &mut Criterion) {
    let value = snapfmt::Value::opaque_repr("<Widget object at 0x7f3a9c04e2d0>");

    c.bench_function("render_opaque_scrubbed", |b| {
        b.iter(|| render_value(black_box(&value)))
    });
}

criterion_group!(
    benches,
    benchmark_render_simple,
    benchmark_render_wide_map,
    benchmark_render_nested,
    benchmark_render_deep_list,
    benchmark_render_strings,
    benchmark_scrub
);
criterion_main!(benches);
