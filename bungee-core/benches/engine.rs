//! Throughput of a full calculation, numeric and from field text

use bungee_core::{CalculationEngine, JumpInputs, OptimalityMode, RawInputs};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_compute(c: &mut Criterion) {
    let engine = CalculationEngine::default();
    let inputs = JumpInputs::new(70.0, 50.0, 1.7, 0.35).unwrap();

    c.bench_function("compute_literal", |b| {
        b.iter(|| engine.compute(black_box(&inputs)))
    });

    let as_built = engine.with_mode(OptimalityMode::AsBuilt);
    c.bench_function("compute_as_built", |b| {
        b.iter(|| as_built.compute(black_box(&inputs)))
    });

    let raw = RawInputs::new("70", "50", "1.7", "0.35");
    c.bench_function("compute_raw", |b| {
        b.iter(|| engine.compute_raw(black_box(&raw)))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
