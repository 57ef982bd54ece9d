//! Second order in time, 16th order in space finite differences for the
//! 2D constant density acoustic wave equation.

pub mod build_info;
pub mod cli;
pub mod csv;
pub mod domain;
pub mod error;
pub mod image;
pub mod init;
pub mod propagator;
pub mod solver;
pub mod source;
pub mod stencil;
pub mod timing;
pub mod util;
