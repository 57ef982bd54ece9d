//! Benchmark harness.
//!
//! Times kernels on `TimingModel` problems as either the step count or the
//! model size varies, keeping the fastest of several repeats.

use crate::error::*;
use crate::init::*;
use crate::propagator::*;
use crate::solver::*;
use std::time::Instant;

/// One measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingRecord {
    pub version: String,
    pub num_steps: usize,
    pub model_size: usize,
    /// Fastest wall time over the repeats.
    pub seconds: f64,
}

/// Harness settings shared by both sweeps.
#[derive(Clone, Debug)]
pub struct TimingParameters {
    pub num_repeat: usize,
    pub align: Option<usize>,
    pub seed: u64,
}

impl std::default::Default for TimingParameters {
    fn default() -> Self {
        TimingParameters {
            num_repeat: 10,
            align: None,
            seed: 1,
        }
    }
}

/// Minimum wall time of `num_repeat` runs of `kernel` over the full model.
///
/// Every repeat continues from the wavefield the previous one left behind,
/// which keeps setup cost out of the measurement.
pub fn time_kernel<K: WaveKernel + ?Sized>(
    kernel: &K,
    model: &TimingModel,
    num_repeat: usize,
    align: Option<usize>,
) -> Result<f64> {
    let mut propagator = Propagator::new(
        &model.model,
        model.size,
        model.size,
        model.dx,
        Some(model.dt),
        align,
    )?;
    let sources = model.sources.as_sources();
    let mut best = f64::INFINITY;
    for _ in 0..num_repeat.max(1) {
        profiling::scope!("timing::repeat");
        let start = Instant::now();
        propagator.step(kernel, model.num_steps, &sources)?;
        best = best.min(start.elapsed().as_secs_f64());
    }
    Ok(best)
}

fn time_kernels(
    kernels: &[Box<dyn WaveKernel>],
    model: &TimingModel,
    params: &TimingParameters,
    records: &mut Vec<TimingRecord>,
) -> Result<()> {
    for kernel in kernels {
        let kernel = kernel.as_ref();
        let seconds =
            time_kernel(kernel, model, params.num_repeat, params.align)?;
        let record = TimingRecord {
            version: kernel.label(),
            num_steps: model.num_steps,
            model_size: model.size,
            seconds,
        };
        tracing::info!(
            version = %record.version,
            num_steps = record.num_steps,
            model_size = record.model_size,
            seconds = record.seconds,
            "timed"
        );
        records.push(record);
    }
    Ok(())
}

/// Time every kernel on a `model_size` square model for each step count.
pub fn run_timing_num_steps(
    kernels: &[Box<dyn WaveKernel>],
    num_steps: &[usize],
    model_size: usize,
    params: &TimingParameters,
) -> Result<Vec<TimingRecord>> {
    let mut records = Vec::new();
    for &steps in num_steps {
        let model = TimingModel::new(model_size, steps, params.seed);
        time_kernels(kernels, &model, params, &mut records)?;
    }
    Ok(records)
}

/// Time every kernel for each model size at a fixed step count.
pub fn run_timing_model_size(
    kernels: &[Box<dyn WaveKernel>],
    num_steps: usize,
    model_sizes: &[usize],
    params: &TimingParameters,
) -> Result<Vec<TimingRecord>> {
    let mut records = Vec::new();
    for &size in model_sizes {
        let model = TimingModel::new(size, num_steps, params.seed);
        time_kernels(kernels, &model, params, &mut records)?;
    }
    Ok(records)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn kernels() -> Vec<Box<dyn WaveKernel>> {
        let params = KernelParameters {
            rows_per_task: 2,
            block_rows: 4,
            block_cols: 8,
        };
        KernelKind::all().iter().map(|k| k.build(&params)).collect()
    }

    #[test]
    fn sweep_num_steps() {
        let params = TimingParameters {
            num_repeat: 2,
            ..Default::default()
        };
        let records =
            run_timing_num_steps(&kernels(), &[0, 3], 24, &params).unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].version, "sequential");
        assert_eq!(records[0].num_steps, 0);
        assert_eq!(records[5].version, "blocked(4x8)");
        assert_eq!(records[5].num_steps, 3);
        assert!(records.iter().all(|r| r.model_size == 24));
        assert!(records.iter().all(|r| r.seconds >= 0.0));
    }

    #[test]
    fn sweep_model_size() {
        let params = TimingParameters {
            num_repeat: 1,
            align: Some(64),
            seed: 3,
        };
        let records =
            run_timing_model_size(&kernels()[..1], 2, &[10, 20], &params)
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model_size, 10);
        assert_eq!(records[1].model_size, 20);
    }
}
