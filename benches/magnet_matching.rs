//! Magnet Matching Benchmarks
//!
//! Measures the per-tick cost of classifying clipboard text and inserting
//! into the link store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use magnet_watch::{is_magnet_link, LinkStore};

fn magnet(i: usize) -> String {
    format!("magnet:?xt=urn:btih:{:040x}", i)
}

/// Benchmark classification of typical clipboard contents
fn bench_is_magnet_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_magnet_link");

    let inputs = [
        ("magnet", magnet(42)),
        ("short_hash", "magnet:?xt=urn:btih:ZZZ".to_string()),
        ("plain_text", "hello world".to_string()),
        ("large_text", "lorem ipsum ".repeat(10_000)),
    ];

    for (name, input) in &inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| is_magnet_link(black_box(input)))
        });
    }

    group.finish();
}

/// Benchmark store insertion, half of it duplicates
fn bench_store_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_insert");

    for count in [100usize, 1_000, 10_000] {
        let links: Vec<String> = (0..count).map(|i| magnet(i / 2)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &links, |b, links| {
            b.iter(|| {
                let mut store = LinkStore::new();
                for link in links {
                    store.insert(link.as_str());
                }
                black_box(store.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_is_magnet_link, bench_store_insert);
criterion_main!(benches);
