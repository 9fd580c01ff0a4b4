//! Benchmark for region generation and the advance loop.
//!
//! TARGET: a full 3x3 neighborhood generated faster than an observer
//! can cross one tile
//!
//! Run with: cargo bench --package voidfield_procedural --bench world_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use voidfield_procedural::{WorldConfig, WorldManager};

fn benchmark_single_tile(c: &mut Criterion) {
    let manager = WorldManager::new(WorldConfig::default());

    c.bench_function("generate_one_tile", |b| {
        let mut tx = 0i64;
        b.iter(|| {
            tx += 1;
            black_box(manager.generate_tile(black_box(tx), 0, 0.0))
        });
    });
}

fn benchmark_cold_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    group.sample_size(20);

    group.bench_function("cold_start_neighborhood", |b| {
        b.iter(|| {
            let mut manager = WorldManager::new(WorldConfig::default());
            manager.advance(black_box(100_000.0), black_box(100_000.0), 0.0);
            black_box(manager.region_count())
        });
    });

    group.finish();
}

fn benchmark_drift(c: &mut Criterion) {
    let mut group = c.benchmark_group("drift");
    group.throughput(Throughput::Elements(100));
    group.sample_size(10);

    group.bench_function("100_advances_drifting_east", |b| {
        b.iter(|| {
            let mut manager = WorldManager::new(WorldConfig::default());
            let mut x = 100_000.0;
            for _ in 0..100 {
                x += 50.0;
                manager.advance(x, 100_000.0, 0.0);
            }
            black_box(manager.stats())
        });
    });

    group.finish();
}

fn benchmark_blink_sweep(c: &mut Criterion) {
    let mut manager = WorldManager::new(WorldConfig::default());
    manager.advance(100_000.0, 100_000.0, 0.0);

    c.bench_function("blink_sweep_full_window", |b| {
        let mut now = 0.0;
        b.iter(|| {
            now += 100.0;
            manager.update_star_blinks(black_box(now));
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_tile,
    benchmark_cold_advance,
    benchmark_drift,
    benchmark_blink_sweep
);
criterion_main!(benches);
