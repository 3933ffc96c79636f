use std::{collections::HashMap, hint::black_box};

use chainmap::HashTable;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{distributions::Alphanumeric, rngs::SmallRng, Rng, SeedableRng};

const N: usize = 10_000;

/// Случайные ключи длиной 8..24 символа, воспроизводимые между запусками.
fn random_keys(n: usize) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(8..24);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn bench_set(c: &mut Criterion) {
    let keys = random_keys(N);

    c.bench_function("set 10_000 (HashTable)", |b| {
        b.iter(|| {
            let mut t = HashTable::with_defaults();
            for (i, k) in keys.iter().enumerate() {
                t.set(black_box(k.as_str()), black_box(i));
            }
            t
        });
    });

    c.bench_function("insert 10_000 (HashMap)", |b| {
        b.iter(|| {
            let mut m = HashMap::new();
            for (i, k) in keys.iter().enumerate() {
                m.insert(black_box(k.clone()), black_box(i));
            }
            m
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let keys = random_keys(N);
    let table: HashTable<usize> = keys.iter().cloned().zip(0..).collect();
    let map: HashMap<String, usize> = keys.iter().cloned().zip(0..).collect();

    c.bench_function("get 10_000 (HashTable)", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(table.get(k));
            }
        });
    });

    c.bench_function("get 10_000 (HashMap)", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(map.get(k));
            }
        });
    });

    c.bench_function("get 10_000 missing (HashTable)", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(table.has(&k[1..]));
            }
        });
    });
}

fn bench_remove(c: &mut Criterion) {
    let keys = random_keys(N);

    c.bench_function("set + remove 10_000 (HashTable)", |b| {
        b.iter(|| {
            let mut t = HashTable::with_defaults();
            for k in &keys {
                t.set(k.as_str(), ());
            }
            for k in &keys {
                t.remove(k);
            }
        });
    });

    c.bench_function("insert + remove 10_000 (HashMap)", |b| {
        b.iter(|| {
            let mut m = HashMap::new();
            for k in &keys {
                m.insert(k.clone(), ());
            }
            for k in &keys {
                m.remove(k);
            }
        });
    });
}

criterion_group!(benches, bench_set, bench_get, bench_remove);
criterion_main!(benches);
