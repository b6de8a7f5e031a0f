//! # Sort-Key Codec Benchmarks
//!
//! The codec runs on every page request and in every ordering check, so it
//! should stay in the sub-microsecond range.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cu_01_sort_key::{map_bounds, normalize_upper_bound, pad_block_height, SortKey, SortKeyBounds};

fn bench_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("cu-01-sort-key");

    group.bench_function("pad_height_only", |b| {
        b.iter(|| pad_block_height(black_box("1257294")))
    });

    group.bench_function("pad_full_key", |b| {
        b.iter(|| pad_block_height(black_box("1257294,1694181441598,fb1ebd7d621d")))
    });

    group.bench_function("normalize_upper_bound", |b| {
        b.iter(|| normalize_upper_bound(black_box("1257294")))
    });

    let bounds = SortKeyBounds::new(Some("1000"), Some("1257294"));
    group.bench_function("map_bounds", |b| b.iter(|| map_bounds(black_box(&bounds))));

    group.finish();
}

fn bench_parse_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("cu-01-sort-key-ordering");

    for size in [100u64, 1_000, 10_000] {
        let keys: Vec<String> = (0..size)
            .rev()
            .map(|i| format!("{:012},{},{:x}", 1_000 + i, 1_694_181_441_000u64 + i, i))
            .collect();

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("parse_and_sort", size), &keys, |b, keys| {
            b.iter(|| {
                let mut parsed: Vec<SortKey> =
                    keys.iter().filter_map(|k| k.parse().ok()).collect();
                parsed.sort();
                black_box(parsed)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_padding, bench_parse_and_sort);
criterion_main!(benches);
