//! Precondition failures.
//!
//! The time stepper trusts its inputs once they have been checked,
//! so every shape or range problem is reported here, before the first step.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PreconditionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreconditionError {
    /// The grid cannot hold an 8 cell halo around a non-empty interior.
    #[error("grid too small for halo: nx={nx}, ny={ny}, nxi={nxi} (need ny > 16, 0 < nxi, nxi + 16 <= nx)")]
    GridTooSmall { nx: usize, ny: usize, nxi: usize },

    #[error("buffer `{name}` holds {actual} samples, expected {expected}")]
    BufferSize {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("source table has {actual} entries, expected {expected}")]
    SourceTable { expected: usize, actual: usize },

    #[error("source {index} at interior ({x}, {y}) is outside the interior region")]
    SourceOutsideInterior { index: usize, x: usize, y: usize },

    /// Every source needs one amplitude per step.
    #[error("source time series has {source_len} samples but {num_steps} steps were requested")]
    SourceTooShort { source_len: usize, num_steps: usize },

    #[error("grid spacing must be finite and positive, got {dx}")]
    InvalidSpacing { dx: f32 },

    #[error("time step must be finite and positive, got {dt}")]
    InvalidTimeStep { dt: f32 },

    #[error("velocity model is empty")]
    EmptyModel,

    #[error("velocity model holds {actual} samples, expected {ny} x {nx}")]
    ModelShape { ny: usize, nx: usize, actual: usize },

    #[error("row alignment must be a positive number of bytes, got {align}")]
    InvalidAlignment { align: usize },
}
