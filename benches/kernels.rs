//! Criterion benchmarks for the interior update kernels.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use wave2d_fd::init::*;
use wave2d_fd::propagator::*;
use wave2d_fd::solver::*;

const NUM_STEPS: usize = 10;

/// Zeroed wavefields over the timing model, built outside the measurement.
fn fresh(tm: &TimingModel) -> Propagator {
    Propagator::new(&tm.model, tm.size, tm.size, tm.dx, Some(tm.dt), None)
        .unwrap()
}

/// Benchmark: 10 steps of each kernel on a 500x500 random model.
fn bench_kernels_500(c: &mut Criterion) {
    let tm = TimingModel::new(500, NUM_STEPS, 1);
    let sources = tm.sources.as_sources();
    let mut group = c.benchmark_group("step_500x500x10");
    group.sample_size(20);

    for kind in KernelKind::all() {
        let kernel = kind.build(&KernelParameters::default());
        group.bench_function(kernel.label(), |b| {
            b.iter_batched_ref(
                || fresh(&tm),
                |propagator| {
                    let view = propagator
                        .step(kernel.as_ref(), NUM_STEPS, &sources)
                        .unwrap();
                    black_box(view.buffer()[0]);
                },
                BatchSize::PerIteration,
            );
        });
    }
    group.finish();
}

/// Benchmark: parallel kernel task granularity.
fn bench_rows_per_task(c: &mut Criterion) {
    let tm = TimingModel::new(500, NUM_STEPS, 1);
    let sources = tm.sources.as_sources();
    let mut group = c.benchmark_group("parallel_rows_per_task");
    group.sample_size(20);

    for rows_per_task in [1, 4, 16, 64] {
        let kernel = ParallelKernel::new(rows_per_task);
        group.bench_function(kernel.label(), |b| {
            b.iter_batched_ref(
                || fresh(&tm),
                |propagator| {
                    let view =
                        propagator.step(&kernel, NUM_STEPS, &sources).unwrap();
                    black_box(view.buffer()[0]);
                },
                BatchSize::PerIteration,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernels_500, bench_rows_per_task);
criterion_main!(benches);
