use chained_hashmap::{HashMap, HashSet};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    // Starts at the default 16 buckets, so this includes every resize.
    c.bench_function("hashmap_insert_10k", |b| {
        b.iter_batched(
            HashMap::new,
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.set(key(x), i).unwrap();
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("hashmap_get_hit", |b| {
        let mut m = HashMap::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.set(k, i).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("hashmap_get_miss", |b| {
        let mut m = HashMap::new();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.set(key(x), i).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = key(miss.next().unwrap());
            black_box(m.get(&k).unwrap());
        })
    });
}

fn bench_set_add_remove(c: &mut Criterion) {
    c.bench_function("hashset_add_remove_1k", |b| {
        let keys: Vec<_> = lcg(3).take(1_000).map(key).collect();
        b.iter_batched(
            HashSet::new,
            |mut s| {
                for k in &keys {
                    s.add(k).unwrap();
                }
                for k in &keys {
                    black_box(s.remove(k).unwrap());
                }
                s
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_set_add_remove
}
criterion_main!(benches);
