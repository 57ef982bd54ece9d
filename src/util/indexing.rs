use crate::util::*;

/// Number of samples in a row-major buffer with `rows` rows of `stride` samples.
pub fn real_buffer_size(rows: usize, stride: usize) -> usize {
    rows * stride
}

pub fn coord_to_linear(coord: &Coord, stride: usize) -> usize {
    debug_assert!(coord[1] < stride);
    coord[0] * stride + coord[1]
}

pub fn linear_to_coord(linear_index: usize, stride: usize) -> Coord {
    vector![linear_index / stride, linear_index % stride]
}

/// Integer division rounding up.
pub fn div_ceil(a: usize, b: usize) -> usize {
    debug_assert!(b > 0);
    a.div_ceil(b)
}
