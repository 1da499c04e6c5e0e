//! Criterion benchmarks for whole-generation updates.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessel_bench::{reference_life_2d, reference_life_3d, wide_parity_2d};

/// Benchmark: one generation of 256x256 life (8 neighbours per cell).
fn bench_update_life_2d(c: &mut Criterion) {
    let mut grid = reference_life_2d(42).unwrap();
    c.bench_function("update_life_2d_65k", |b| {
        b.iter(|| black_box(grid.update()));
    });
}

/// Benchmark: one generation of 32^3 life (26 neighbours per cell).
fn bench_update_life_3d(c: &mut Criterion) {
    let mut grid = reference_life_3d(42).unwrap();
    c.bench_function("update_life_3d_32k", |b| {
        b.iter(|| black_box(grid.update()));
    });
}

/// Benchmark: one generation of 128x128 parity over a 5x5 custom block
/// (24 neighbours per cell, two-deep halo).
fn bench_update_wide_2d(c: &mut Criterion) {
    let mut grid = wide_parity_2d(42).unwrap();
    c.bench_function("update_wide_parity_2d_16k", |b| {
        b.iter(|| black_box(grid.update()));
    });
}

/// Benchmark: ten generations of 256x256 life through `step_n`.
fn bench_step_n_life_2d(c: &mut Criterion) {
    let mut grid = reference_life_2d(7).unwrap();
    c.bench_function("step_n_10_life_2d_65k", |b| {
        b.iter(|| black_box(grid.step_n(10)));
    });
}

criterion_group!(
    benches,
    bench_update_life_2d,
    bench_update_life_3d,
    bench_update_wide_2d,
    bench_step_n_life_2d
);
criterion_main!(benches);
