use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn numbered_keys(count: usize) -> Vec<Vec<u8>> {
    (0..count).map(|i| format!("key{}", i).into_bytes()).collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("std: insertion");

    for numel in [8usize, 64, 512, 4096] {
        let keys = numbered_keys(numel);

        group.bench_with_input(BenchmarkId::from_parameter(numel), &keys, |b, keys| {
            b.iter_batched(
                HashMap::new,
                |mut map| {
                    for (i, key) in keys.iter().enumerate() {
                        map.insert(key.clone(), i);
                    }

                    map
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("std: lookup");

    for numel in [8usize, 64, 512, 4096] {
        let keys = numbered_keys(numel);

        let mut map = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key.clone(), i);
        }

        group.bench_with_input(BenchmarkId::from_parameter(numel), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    criterion::black_box(map.get(criterion::black_box(key)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insertion, bench_lookup);
criterion_main!(benches);
