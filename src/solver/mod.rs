//! The stencil time stepper.
//!
//! `propagate` owns the time loop. For each step it asks a `WaveKernel` to
//! write the next time level over the interior, injects the sources into
//! that level, then swaps the roles of the two buffers.
//! Kernels differ only in how they schedule the interior update,
//! every kernel produces the same bits.

mod blocked;
mod parallel;
mod row;
mod sequential;

pub use blocked::*;
pub use parallel::*;
pub use sequential::*;

use crate::domain::*;
use crate::error::*;
use crate::source::*;
use crate::stencil::*;
use clap::ValueEnum;

pub trait WaveKernel: Send + Sync {
    /// Short name with parameters, used in timing reports.
    fn label(&self) -> String;

    /// Overwrite the interior of `next` with the next time level.
    ///
    /// On entry `next` holds the previous time level and `f` the current one.
    /// Cells outside the interior are neither read from `next` nor written.
    fn update_interior(
        &self,
        f: &[f32],
        next: &mut [f32],
        model: &[f32],
        layout: &GridLayout,
        coefficients: &FdCoefficients,
    );
}

/// Advance the wavefield `num_steps` steps in place.
///
/// `current` and `previous` hold the two most recent time levels and
/// `model` the `v² dt²` term, all laid out by `layout`.
/// Returns which of the two buffers ends up holding the newest level.
/// Inputs are validated once up front, nothing is checked inside the loop.
#[allow(clippy::too_many_arguments)]
pub fn propagate<K: WaveKernel + ?Sized>(
    kernel: &K,
    current: &mut [f32],
    previous: &mut [f32],
    model: &[f32],
    layout: &GridLayout,
    dx: f32,
    sources: &PointSources,
    num_steps: usize,
) -> Result<TimeLevel> {
    layout.check_buffer("current", current)?;
    layout.check_buffer("previous", previous)?;
    layout.check_buffer("model", model)?;
    if !dx.is_finite() || dx <= 0.0 {
        return Err(PreconditionError::InvalidSpacing { dx });
    }
    sources.check(layout, num_steps)?;

    tracing::debug!(
        kernel = %kernel.label(),
        grid = %layout,
        num_steps,
        num_sources = sources.num_sources(),
        "propagate"
    );

    let coefficients = FdCoefficients::new(dx);
    let mut f = current;
    let mut fp = previous;
    for t in 0..num_steps {
        profiling::scope!("wave::step");
        kernel.update_interior(f, fp, model, layout, &coefficients);
        sources.inject(fp, model, layout, t);
        std::mem::swap(&mut f, &mut fp);
    }

    let level = TimeLevel::after_steps(num_steps);
    tracing::debug!(?level, "propagate finished");
    Ok(level)
}

/// The interchangeable interior update strategies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum KernelKind {
    /// One thread, explicit loop over the stencil taps
    Sequential,

    /// Rows distributed over the rayon pool
    Parallel,

    /// Blocks of rows distributed over the rayon pool,
    /// each walked in column blocks
    Blocked,
}

impl KernelKind {
    pub fn all() -> [KernelKind; 3] {
        [KernelKind::Sequential, KernelKind::Parallel, KernelKind::Blocked]
    }

    pub fn build(&self, params: &KernelParameters) -> Box<dyn WaveKernel> {
        match self {
            KernelKind::Sequential => Box::new(SequentialKernel),
            KernelKind::Parallel => {
                Box::new(ParallelKernel::new(params.rows_per_task))
            }
            KernelKind::Blocked => Box::new(BlockedKernel::new(
                params.block_rows,
                params.block_cols,
            )),
        }
    }
}

/// Tuning knobs for the parallel kernels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KernelParameters {
    /// Interior rows handled by one task of `ParallelKernel`.
    pub rows_per_task: usize,

    /// Rows per task of `BlockedKernel`.
    pub block_rows: usize,

    /// Columns per block of `BlockedKernel`.
    pub block_cols: usize,
}

impl std::default::Default for KernelParameters {
    fn default() -> Self {
        KernelParameters {
            rows_per_task: 1,
            block_rows: 16,
            block_cols: 256,
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    struct Zeroing;

    impl WaveKernel for Zeroing {
        fn label(&self) -> String {
            "zeroing".to_string()
        }

        fn update_interior(
            &self,
            _f: &[f32],
            next: &mut [f32],
            _model: &[f32],
            layout: &GridLayout,
            _coefficients: &FdCoefficients,
        ) {
            for i in layout.interior_rows() {
                for j in layout.interior_cols() {
                    next[i * layout.nx() + j] = 0.0;
                }
            }
        }
    }

    #[test]
    fn injection_follows_update() {
        // The kernel clears the interior every step, so only the amplitude
        // of the final step survives in the returned buffer.
        let layout = GridLayout::with_interior(16, 16).unwrap();
        let n = layout.buffer_size();
        let mut a = vec![0.0; n];
        let mut b = vec![0.0; n];
        let model = vec![1.0; n];
        let amps = [1.0, 2.0, 3.0];
        let sources = PointSources::new(&amps, 3, &[2], &[3]).unwrap();

        let level = propagate(
            &Zeroing, &mut a, &mut b, &model, &layout, 1.0, &sources, 3,
        )
        .unwrap();
        assert_eq!(level, TimeLevel::Previous);
        let idx = 11 * layout.nx() + 10;
        assert_eq!(b[idx], 3.0);
        assert_eq!(a[idx], 2.0);
    }

    #[test]
    fn rejects_bad_inputs() {
        let layout = GridLayout::with_interior(16, 16).unwrap();
        let n = layout.buffer_size();
        let mut a = vec![0.0; n];
        let mut b = vec![0.0; n - 1];
        let model = vec![1.0; n];
        let none = PointSources::none();

        let r = propagate(
            &SequentialKernel,
            &mut a,
            &mut b,
            &model,
            &layout,
            1.0,
            &none,
            1,
        );
        assert_eq!(
            r,
            Err(PreconditionError::BufferSize {
                name: "previous",
                expected: n,
                actual: n - 1
            })
        );

        let mut b = vec![0.0; n];
        for dx in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let r = propagate(
                &SequentialKernel,
                &mut a,
                &mut b,
                &model,
                &layout,
                dx,
                &none,
                1,
            );
            assert!(matches!(r, Err(PreconditionError::InvalidSpacing { .. })));
        }

        let amps = [1.0; 2];
        let short = PointSources::new(&amps, 2, &[0], &[0]).unwrap();
        let r = propagate(
            &SequentialKernel,
            &mut a,
            &mut b,
            &model,
            &layout,
            1.0,
            &short,
            3,
        );
        assert!(matches!(r, Err(PreconditionError::SourceTooShort { .. })));

        let far =
            PointSources::new(&amps[..1], 1, &[usize::MAX], &[0]).unwrap();
        let r = propagate(
            &SequentialKernel,
            &mut a,
            &mut b,
            &model,
            &layout,
            1.0,
            &far,
            1,
        );
        assert!(matches!(
            r,
            Err(PreconditionError::SourceOutsideInterior { .. })
        ));
    }

    #[test]
    fn kinds_build() {
        let params = KernelParameters::default();
        let labels: Vec<String> = KernelKind::all()
            .iter()
            .map(|k| k.build(&params).label())
            .collect();
        assert_eq!(labels[0], "sequential");
        assert_eq!(labels[1], "parallel(rows=1)");
        assert_eq!(labels[2], "blocked(16x256)");
    }
}
