//! Models and source waveforms
//!
//! Inputs for the timing harness and the demos.

use crate::source::*;
use rand::prelude::*;
use std::f32::consts::PI;

/// Ricker (Mexican hat) wavelet with peak frequency `freq`,
/// sampled `length` times every `dt` seconds and centered at `peak_time`.
pub fn ricker(freq: f32, length: usize, dt: f32, peak_time: f32) -> Vec<f32> {
    let pf2 = PI * PI * freq * freq;
    (0..length)
        .map(|n| {
            let t = n as f32 * dt - peak_time;
            let t2 = t * t;
            (1.0 - 2.0 * pf2 * t2) * (-pf2 * t2).exp()
        })
        .collect()
}

/// `n x n` velocities drawn uniformly from `[1500, 4500)`.
pub fn random_model(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * n).map(|_| rng.gen_range(1500.0..4500.0)).collect()
}

/// Problem used to time the kernels: a random square model with one
/// Ricker source in the middle.
pub struct TimingModel {
    pub model: Vec<f32>,
    pub size: usize,
    pub dx: f32,
    pub dt: f32,
    pub num_steps: usize,
    pub sources: SourceTable,
}

impl TimingModel {
    pub const DX: f32 = 5.0;
    pub const DT: f32 = 0.001;
    pub const FREQ: f32 = 25.0;
    pub const PEAK_TIME: f32 = 0.05;

    pub fn new(size: usize, num_steps: usize, seed: u64) -> Self {
        let model = random_model(size, seed);
        let trace = ricker(Self::FREQ, num_steps, Self::DT, Self::PEAK_TIME);
        let mut sources = SourceTable::new(num_steps);
        sources.push(size / 2, size / 2, &trace);
        TimingModel {
            model,
            size,
            dx: Self::DX,
            dt: Self::DT,
            num_steps,
            sources,
        }
    }
}
