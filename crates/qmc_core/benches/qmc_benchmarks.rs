//! Criterion benchmarks for qmc_core point generation.
//!
//! Measures sequential (Gray-code and extensible) generation, parallel
//! linear-order generation and the cost of each randomisation across
//! batch sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qmc_core::randomise::{RandomDigitalShift, RandomOwenScramble, RandomShift};
use qmc_core::sequences::{DigitalNet, Lattice};
use qmc_core::traits::{LowDiscrepancySequence, RandomisedSequence};

const DIMENSION: usize = 16;

/// Benchmark sequential generation of the deterministic sequences.
fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");

    for n in [1_024, 16_384, 131_072] {
        group.bench_with_input(BenchmarkId::new("digital_net", n), &n, |b, &n| {
            let mut net = DigitalNet::<u64>::new(DIMENSION).unwrap();
            b.iter(|| {
                net.reset();
                black_box(net.next(n).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("lattice", n), &n, |b, &n| {
            let mut lattice = Lattice::new(DIMENSION).unwrap();
            b.iter(|| {
                lattice.reset();
                black_box(lattice.next(n).unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark parallel linear-order generation.
fn bench_first_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_linear");
    let net = DigitalNet::<u64>::new(DIMENSION).unwrap();
    let lattice = Lattice::new(DIMENSION).unwrap();

    for log2_n in [10u32, 14, 17] {
        group.bench_with_input(
            BenchmarkId::new("digital_net", log2_n),
            &log2_n,
            |b, &log2_n| b.iter(|| black_box(net.first_linear(log2_n).unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("lattice", log2_n),
            &log2_n,
            |b, &log2_n| b.iter(|| black_box(lattice.first_linear(log2_n).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark the randomisers with several replications.
fn bench_randomised(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomised");
    let replications = 8;
    let n = 4_096;

    group.bench_function("digital_shift", |b| {
        let net = DigitalNet::<u64>::new(DIMENSION).unwrap();
        let mut shifted = RandomDigitalShift::new(net, replications, Some(42)).unwrap();
        b.iter(|| {
            shifted.reset();
            black_box(shifted.next_r(n).unwrap())
        });
    });

    group.bench_function("shift", |b| {
        let lattice = Lattice::new(DIMENSION).unwrap();
        let mut shifted = RandomShift::new(lattice, replications, Some(42)).unwrap();
        b.iter(|| {
            shifted.reset();
            black_box(shifted.next_r(n).unwrap())
        });
    });

    // after the first iteration every scramble bit is memoised
    group.bench_function("owen_scramble_memoised", |b| {
        let net = DigitalNet::<u64>::new(DIMENSION).unwrap();
        let mut owen = RandomOwenScramble::new(net, replications, Some(42)).unwrap();
        b.iter(|| {
            owen.reset();
            black_box(owen.next_r(n).unwrap())
        });
    });

    group.bench_function("owen_scramble_linear", |b| {
        let net = DigitalNet::<u64>::new(DIMENSION).unwrap();
        let owen = RandomOwenScramble::new(net, replications, Some(42)).unwrap();
        b.iter(|| black_box(owen.first_r_linear(12).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_next, bench_first_linear, bench_randomised);
criterion_main!(benches);
