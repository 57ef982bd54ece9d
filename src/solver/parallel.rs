use super::row::*;
use super::*;
use rayon::prelude::*;

/// Interior rows split into tasks of `rows_per_task` rows on the rayon pool.
///
/// Each task owns a disjoint slice of output rows and only reads `f` and
/// `model`, so tasks need no synchronization. `update_interior` returns
/// once every task has finished.
#[derive(Copy, Clone, Debug)]
pub struct ParallelKernel {
    rows_per_task: usize,
}

impl ParallelKernel {
    pub fn new(rows_per_task: usize) -> Self {
        ParallelKernel {
            rows_per_task: rows_per_task.max(1),
        }
    }

    pub fn rows_per_task(&self) -> usize {
        self.rows_per_task
    }
}

impl std::default::Default for ParallelKernel {
    fn default() -> Self {
        ParallelKernel::new(1)
    }
}

impl WaveKernel for ParallelKernel {
    fn label(&self) -> String {
        format!("parallel(rows={})", self.rows_per_task)
    }

    fn update_interior(
        &self,
        f: &[f32],
        next: &mut [f32],
        model: &[f32],
        layout: &GridLayout,
        coefficients: &FdCoefficients,
    ) {
        profiling::scope!("parallel::interior");
        let nx = layout.nx();
        let w = coefficients.weights();
        let cols = layout.interior_cols();
        let first_row = layout.interior_rows().start;
        let rows_per_task = self.rows_per_task;

        next[layout.interior_row_span()]
            .par_chunks_mut(rows_per_task * nx)
            .enumerate()
            .for_each(|(task, rows): (usize, &mut [f32])| {
                profiling::scope!("parallel::interior Thread Callback");
                let row_start = first_row + task * rows_per_task;
                for (r, next_row) in rows.chunks_exact_mut(nx).enumerate() {
                    update_row(
                        f,
                        next_row,
                        model,
                        row_start + r,
                        cols.clone(),
                        nx,
                        w,
                    );
                }
            });
    }
}
