pub mod indexing;

pub use indexing::*;
pub use nalgebra::vector;

/// Grid coordinates are `(row, column)`, i.e. `(y, x)`,
/// matching the row-major layout of every buffer in this crate.
pub type Coord = nalgebra::Vector2<usize>;
