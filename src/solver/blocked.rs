use super::row::*;
use super::*;
use rayon::prelude::*;

/// Cache blocked variant of `ParallelKernel`.
///
/// Tasks own `block_rows` interior rows and sweep them one column block of
/// `block_cols` at a time, so the 17 rows the stencil reads stay hot while
/// a block is processed.
#[derive(Copy, Clone, Debug)]
pub struct BlockedKernel {
    block_rows: usize,
    block_cols: usize,
}

impl BlockedKernel {
    pub fn new(block_rows: usize, block_cols: usize) -> Self {
        BlockedKernel {
            block_rows: block_rows.max(1),
            block_cols: block_cols.max(1),
        }
    }
}

impl WaveKernel for BlockedKernel {
    fn label(&self) -> String {
        format!("blocked({}x{})", self.block_rows, self.block_cols)
    }

    fn update_interior(
        &self,
        f: &[f32],
        next: &mut [f32],
        model: &[f32],
        layout: &GridLayout,
        coefficients: &FdCoefficients,
    ) {
        profiling::scope!("blocked::interior");
        let nx = layout.nx();
        let w = coefficients.weights();
        let cols = layout.interior_cols();
        let first_row = layout.interior_rows().start;
        let block_rows = self.block_rows;
        let block_cols = self.block_cols;

        next[layout.interior_row_span()]
            .par_chunks_mut(block_rows * nx)
            .enumerate()
            .for_each(|(task, rows): (usize, &mut [f32])| {
                profiling::scope!("blocked::interior Thread Callback");
                let row_start = first_row + task * block_rows;
                for j_start in cols.clone().step_by(block_cols) {
                    let j_end = (j_start + block_cols).min(cols.end);
                    let row_iter = rows.chunks_exact_mut(nx).enumerate();
                    for (r, next_row) in row_iter {
                        update_row(
                            f,
                            next_row,
                            model,
                            row_start + r,
                            j_start..j_end,
                            nx,
                            w,
                        );
                    }
                }
            });
    }
}
