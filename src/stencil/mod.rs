//! The 16th order second derivative stencil.

mod coefficients;
mod laplacian;

pub use coefficients::*;
pub use laplacian::*;
