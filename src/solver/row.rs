use crate::stencil::*;
use std::ops::Range;

/// Update columns `cols` of interior row `i`.
///
/// `next_row` is row `i` of the output buffer, so it is indexed by column
/// while `f` and `model` are indexed by linear position.
#[inline(always)]
pub(crate) fn update_row(
    f: &[f32],
    next_row: &mut [f32],
    model: &[f32],
    i: usize,
    cols: Range<usize>,
    nx: usize,
    w: &[f32; TAPS],
) {
    debug_assert_eq!(next_row.len(), nx);
    debug_assert!(cols.end + RADIUS <= nx);
    let base = i * nx;
    for j in cols {
        let idx = base + j;
        let f_xx = laplacian_unrolled(f, idx, nx, w);
        next_row[j] = leapfrog(model[idx], f_xx, f[idx], next_row[j]);
    }
}
