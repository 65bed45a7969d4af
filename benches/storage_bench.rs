//! Benchmarks for logkv storage operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use logkv::{Config, Store};
use tempfile::TempDir;

fn open_store(capacity: usize) -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .log_path(temp_dir.path().join("bench.db"))
        .buffer_capacity(capacity)
        .build();
    let store = Store::open(config).unwrap();
    (temp_dir, store)
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_buffered", |b| {
        b.iter_batched(
            || open_store(usize::MAX),
            |(_temp, mut store)| {
                for i in 0..1000 {
                    store
                        .add(black_box(&format!("key{}", i)), black_box("value"))
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("add_with_threshold_flushes", |b| {
        b.iter_batched(
            || open_store(100),
            |(_temp, mut store)| {
                for i in 0..1000 {
                    store
                        .add(black_box(&format!("key{}", i)), black_box("value"))
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_show(c: &mut Criterion) {
    let (_temp, mut store) = open_store(1000);
    for i in 0..1000 {
        store.add(&format!("key{}", i), "value").unwrap();
    }
    store.flush().unwrap();

    c.bench_function("show_flushed", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let key = format!("key{}", i % 1000);
            i += 1;
            black_box(store.show(&key).unwrap())
        });
    });

    let (_temp2, mut buffered) = open_store(usize::MAX);
    for i in 0..1000 {
        buffered.add(&format!("key{}", i), "value").unwrap();
    }

    c.bench_function("show_buffered", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let key = format!("key{}", i % 1000);
            i += 1;
            black_box(buffered.show(&key).unwrap())
        });
    });
}

criterion_group!(benches, bench_add, bench_show);
criterion_main!(benches);
