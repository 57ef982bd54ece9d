//! Point sources.
//!
//! A source sits at a fixed interior grid location and adds one amplitude
//! per time step, scaled by the model term at its cell, after the stencil
//! update of that step.

use crate::domain::*;
use crate::error::*;
use crate::util::*;

/// Borrowed source table.
///
/// `amplitudes` is row-major `num_sources x source_len`, positions are
/// interior `(x, y)` coordinates (the halo is not included).
#[derive(Copy, Clone, Debug)]
pub struct PointSources<'a> {
    amplitudes: &'a [f32],
    source_len: usize,
    xs: &'a [usize],
    ys: &'a [usize],
}

impl<'a> PointSources<'a> {
    pub fn new(
        amplitudes: &'a [f32],
        source_len: usize,
        xs: &'a [usize],
        ys: &'a [usize],
    ) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(PreconditionError::SourceTable {
                expected: xs.len(),
                actual: ys.len(),
            });
        }
        let expected = xs.len() * source_len;
        if amplitudes.len() != expected {
            return Err(PreconditionError::SourceTable {
                expected,
                actual: amplitudes.len(),
            });
        }
        Ok(PointSources {
            amplitudes,
            source_len,
            xs,
            ys,
        })
    }

    /// No sources, pure propagation of the initial field.
    pub fn none() -> Self {
        PointSources {
            amplitudes: &[],
            source_len: 0,
            xs: &[],
            ys: &[],
        }
    }

    pub fn num_sources(&self) -> usize {
        self.xs.len()
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Time series of source `s`.
    pub fn trace(&self, s: usize) -> &'a [f32] {
        &self.amplitudes[s * self.source_len..(s + 1) * self.source_len]
    }

    #[inline]
    pub fn amplitude(&self, s: usize, t: usize) -> f32 {
        debug_assert!(t < self.source_len);
        self.amplitudes[s * self.source_len + t]
    }

    /// Interior `(y, x)` coordinate of source `s`.
    pub fn position(&self, s: usize) -> Coord {
        vector![self.ys[s], self.xs[s]]
    }

    /// Every source must lie in the interior and cover `num_steps` steps.
    pub fn check(&self, layout: &GridLayout, num_steps: usize) -> Result<()> {
        for s in 0..self.num_sources() {
            // Compare before shifting into padded coordinates, so huge
            // positions cannot overflow.
            if self.xs[s] >= layout.nxi() || self.ys[s] >= layout.nyi() {
                return Err(PreconditionError::SourceOutsideInterior {
                    index: s,
                    x: self.xs[s],
                    y: self.ys[s],
                });
            }
        }
        if !self.is_empty() && self.source_len < num_steps {
            return Err(PreconditionError::SourceTooShort {
                source_len: self.source_len,
                num_steps,
            });
        }
        Ok(())
    }

    /// Add step `t` of every source into `next`, in source order.
    ///
    /// Must run after the interior update of step `t` has written `next`.
    pub fn inject(
        &self,
        next: &mut [f32],
        model: &[f32],
        layout: &GridLayout,
        t: usize,
    ) {
        profiling::scope!("wave::inject");
        for s in 0..self.num_sources() {
            let padded = layout.to_padded(&self.position(s));
            let idx = layout.coord_to_linear(&padded);
            next[idx] += model[idx] * self.amplitude(s, t);
        }
    }
}

/// Owned counterpart of `PointSources`.
#[derive(Clone, Debug, Default)]
pub struct SourceTable {
    amplitudes: Vec<f32>,
    source_len: usize,
    xs: Vec<usize>,
    ys: Vec<usize>,
}

impl SourceTable {
    /// All traces must share one length.
    pub fn new(source_len: usize) -> Self {
        SourceTable {
            source_len,
            ..Default::default()
        }
    }

    /// Add a source at interior `(x, y)`. The trace is truncated or zero
    /// padded to the table's `source_len`.
    pub fn push(&mut self, x: usize, y: usize, trace: &[f32]) {
        let n = trace.len().min(self.source_len);
        self.amplitudes.extend_from_slice(&trace[..n]);
        self.amplitudes
            .extend(std::iter::repeat(0.0).take(self.source_len - n));
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Same sources restricted to steps `start..start + len`, zero padded
    /// past the end of the traces. Lets a long run be stepped in chunks.
    pub fn window(&self, start: usize, len: usize) -> SourceTable {
        let mut result = SourceTable::new(len);
        let sources = self.as_sources();
        for s in 0..sources.num_sources() {
            let trace = sources.trace(s);
            let begin = start.min(trace.len());
            result.push(self.xs[s], self.ys[s], &trace[begin..]);
        }
        result
    }

    pub fn as_sources(&self) -> PointSources<'_> {
        PointSources {
            amplitudes: &self.amplitudes,
            source_len: self.source_len,
            xs: &self.xs,
            ys: &self.ys,
        }
    }
}
