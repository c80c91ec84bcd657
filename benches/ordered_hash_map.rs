use std::{collections::HashMap, hint::black_box};

use criterion::{
    criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use ordered_collections::OrderedHashMap;

const SIZES: &[usize] = &[1000, 10000];

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("ordered_hash_map", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut map = OrderedHashMap::with_capacity(1);
                    for i in 0..size {
                        map.set(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std_hash_map", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut map = HashMap::with_capacity(1);
                    for i in 0..size {
                        map.insert(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let map: OrderedHashMap<usize, usize> =
            (0..size).map(|i| (i, i)).collect();

        group.bench_with_input(
            BenchmarkId::new("ordered_hash_map", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        black_box(map.get(&i));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_and_reinsert");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("ordered_hash_map", size),
            &size,
            |b, &size| {
                let mut map: OrderedHashMap<usize, usize> =
                    (0..size).map(|i| (i, i)).collect();
                b.iter(|| {
                    for i in (0..size).step_by(2) {
                        let v = map.delete(&i).unwrap_or_default();
                        map.set(i, black_box(v));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let map: OrderedHashMap<usize, usize> =
            (0..size).map(|i| (i, i)).collect();

        group.bench_with_input(
            BenchmarkId::new("ordered_hash_map", size),
            &size,
            |b, _| b.iter(|| map.iter().map(|(_, v)| *v).sum::<usize>()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_lookup,
    bench_churn,
    bench_iteration
);
criterion_main!(benches);
