use std::hint::black_box;

use chainmap::HashTable;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: &[usize] = &[256, 1_024, 8_192, 65_536];
const LOAD_FACTORS: &[f64] = &[0.5, 0.75, 1.0, 2.0];

fn bench_set_with_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth/set_from_default_capacity");

    for &n in SIZES {
        let keys: Vec<String> = (0..n).map(|i| format!("key:{i}")).collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut t = HashTable::with_defaults();
                for k in keys {
                    t.set(black_box(k.as_str()), black_box(0u64));
                }
                black_box(t)
            });
        });
    }

    group.finish();
}

fn bench_set_presized(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth/set_presized");

    for &n in SIZES {
        let keys: Vec<String> = (0..n).map(|i| format!("key:{i}")).collect();
        // Ёмкость, при которой n записей не вызывают роста.
        let capacity = (n as f64 / 0.75).ceil() as usize;

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut t = HashTable::new(0.75, capacity).unwrap();
                for k in keys {
                    t.set(black_box(k.as_str()), black_box(0u64));
                }
                black_box(t)
            });
        });
    }

    group.finish();
}

fn bench_load_factor_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth/get_by_load_factor");
    let keys: Vec<String> = (0..8_192).map(|i| format!("key:{i}")).collect();

    for &lf in LOAD_FACTORS {
        let mut t = HashTable::new(lf, 16).unwrap();
        for k in &keys {
            t.set(k.as_str(), 0u64);
        }

        group.bench_with_input(BenchmarkId::from_parameter(lf), &t, |b, t| {
            b.iter(|| {
                for k in &keys {
                    black_box(t.get(k));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_set_with_growth,
    bench_set_presized,
    bench_load_factor_lookup
);
criterion_main!(benches);
