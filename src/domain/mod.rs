//! Wavefield storage.
//!
//! Every buffer is a padded, row-major `ny x nx` grid of `f32` samples.
//! `GridLayout` maps between coordinates and the flat buffer,
//! `FieldView` reads a buffer through a layout, and
//! `WaveFields` owns the two time levels the stepper alternates between.

mod fields;
mod layout;
mod view;

pub use fields::*;
pub use layout::*;
pub use view::*;
