//! Model setup around the time stepper.
//!
//! `Propagator` turns an un-padded velocity model into the padded
//! `v² dt²` array the kernels expect, owns the two wavefields, and keeps
//! track of which one is current across calls.

use crate::domain::*;
use crate::error::*;
use crate::solver::*;
use crate::source::*;
use crate::util::*;

/// Fraction of the stability limit used when no time step is given.
pub const DEFAULT_COURANT: f32 = 0.6;

pub struct Propagator {
    /// Un-padded model shape.
    ny: usize,
    nx: usize,
    dx: f32,
    dt: f32,
    model_padded2_dt2: Vec<f32>,
    fields: WaveFields,
}

impl Propagator {
    /// `model` is an `ny x nx` row-major velocity model with spacing `dx`.
    ///
    /// `dt` defaults to `0.6 dx / max(v)`. `align` is a byte count the padded
    /// row length is rounded up to (in whole `f32`s), defaulting to 1.
    pub fn new(
        model: &[f32],
        ny: usize,
        nx: usize,
        dx: f32,
        dt: Option<f32>,
        align: Option<usize>,
    ) -> Result<Self> {
        if model.is_empty() || ny == 0 || nx == 0 {
            return Err(PreconditionError::EmptyModel);
        }
        if model.len() != ny * nx {
            return Err(PreconditionError::ModelShape {
                ny,
                nx,
                actual: model.len(),
            });
        }
        if !dx.is_finite() || dx <= 0.0 {
            return Err(PreconditionError::InvalidSpacing { dx });
        }
        let align = align.unwrap_or(1);
        if align == 0 {
            return Err(PreconditionError::InvalidAlignment { align });
        }

        let max_vel = model.iter().copied().fold(f32::MIN, f32::max);
        let dt = dt.unwrap_or(DEFAULT_COURANT * dx / max_vel);
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PreconditionError::InvalidTimeStep { dt });
        }

        let layout = padded_layout(ny, nx, align)?;
        let padded = edge_pad(model, ny, nx, &layout);
        let dt2 = dt * dt;
        let model_padded2_dt2 = padded.iter().map(|v| v * v * dt2).collect();

        tracing::debug!(ny, nx, dx, dt, grid = %layout, "propagator setup");

        Ok(Propagator {
            ny,
            nx,
            dx,
            dt,
            model_padded2_dt2,
            fields: WaveFields::new(layout),
        })
    }

    pub fn layout(&self) -> &GridLayout {
        self.fields.layout()
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn dx(&self) -> f32 {
        self.dx
    }

    /// Un-padded `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    pub fn model_padded2_dt2(&self) -> &[f32] {
        &self.model_padded2_dt2
    }

    pub fn fields(&self) -> &WaveFields {
        &self.fields
    }

    /// Mutable access, e.g. to set an initial condition.
    pub fn fields_mut(&mut self) -> &mut WaveFields {
        &mut self.fields
    }

    /// Advance `num_steps` steps and return the current wavefield.
    pub fn step<K: WaveKernel + ?Sized>(
        &mut self,
        kernel: &K,
        num_steps: usize,
        sources: &PointSources,
    ) -> Result<FieldView<'_>> {
        let layout = *self.fields.layout();
        let (current, previous) = self.fields.split_mut();
        let level = propagate(
            kernel,
            current,
            previous,
            &self.model_padded2_dt2,
            &layout,
            self.dx,
            sources,
            num_steps,
        )?;
        self.fields.advance(level);
        Ok(self.fields.current())
    }

    /// Zero both wavefields, keeping the model.
    pub fn reset(&mut self) {
        self.fields.reset();
    }
}

/// Halo on top, bottom and left; on the right, enough columns to cover the
/// halo and round the row length up to a multiple of `align` bytes.
///
/// Only the row stride is aligned. Buffers are plain `Vec<f32>`, so the
/// address of the first interior sample is just `f32` aligned.
pub fn padded_layout(ny: usize, nx: usize, align: usize) -> Result<GridLayout> {
    let align_floats = div_ceil(align, std::mem::size_of::<f32>());
    let nx_padded = div_ceil(nx + 2 * HALO, align_floats) * align_floats;
    GridLayout::new(nx_padded, ny + 2 * HALO, nx)
}

/// Copy `model` into the padded layout, extending edge values outwards.
pub fn edge_pad(
    model: &[f32],
    ny: usize,
    nx: usize,
    layout: &GridLayout,
) -> Vec<f32> {
    debug_assert_eq!(model.len(), ny * nx);
    let mut padded = vec![0.0; layout.buffer_size()];
    for (i, padded_row) in padded.chunks_exact_mut(layout.nx()).enumerate() {
        let src_i = i.saturating_sub(HALO).min(ny - 1);
        let src_row = &model[src_i * nx..(src_i + 1) * nx];
        for (j, v) in padded_row.iter_mut().enumerate() {
            let src_j = j.saturating_sub(HALO).min(nx - 1);
            *v = src_row[src_j];
        }
    }
    padded
}
