use super::*;

/// Plain nested loops on the calling thread,
/// with the stencil taps accumulated in an inner loop.
#[derive(Copy, Clone, Debug, Default)]
pub struct SequentialKernel;

impl WaveKernel for SequentialKernel {
    fn label(&self) -> String {
        "sequential".to_string()
    }

    fn update_interior(
        &self,
        f: &[f32],
        next: &mut [f32],
        model: &[f32],
        layout: &GridLayout,
        coefficients: &FdCoefficients,
    ) {
        profiling::scope!("sequential::interior");
        let nx = layout.nx();
        let w = coefficients.weights();
        for i in layout.interior_rows() {
            for j in layout.interior_cols() {
                let idx = i * nx + j;
                let f_xx = laplacian_loop(f, idx, nx, w);
                next[idx] = leapfrog(model[idx], f_xx, f[idx], next[idx]);
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn halo_untouched() {
        let layout = GridLayout::new(40, 20, 10).unwrap();
        let n = layout.buffer_size();
        let f: Vec<f32> = (0..n).map(|l| (l % 7) as f32).collect();
        let model = vec![0.1; n];
        let mut next = vec![-5.0; n];
        let coefficients = FdCoefficients::new(1.0);

        SequentialKernel.update_interior(
            &f,
            &mut next,
            &model,
            &layout,
            &coefficients,
        );

        for l in 0..n {
            let c = layout.linear_to_coord(l);
            if !layout.interior_contains(&c) {
                assert_eq!(next[l], -5.0, "halo cell {:?} written", c);
            }
        }
    }

    #[test]
    fn zero_model_extrapolates() {
        // With no spatial term the update is 2 f - fp.
        let layout = GridLayout::with_interior(4, 4).unwrap();
        let n = layout.buffer_size();
        let f = vec![3.0; n];
        let model = vec![0.0; n];
        let mut next = vec![1.0; n];

        SequentialKernel.update_interior(
            &f,
            &mut next,
            &model,
            &layout,
            &FdCoefficients::new(1.0),
        );
        let idx = 9 * layout.nx() + 10;
        assert_eq!(next[idx], 5.0);
    }
}
