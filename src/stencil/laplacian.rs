use super::*;

/// 2D Laplacian at linear index `idx` with an explicit loop over the taps.
///
/// `f` is a padded row-major buffer with stride `nx`, and `idx` must sit at
/// least `RADIUS` rows and columns away from the buffer edges.
#[inline(always)]
pub fn laplacian_loop(
    f: &[f32],
    idx: usize,
    nx: usize,
    w: &[f32; TAPS],
) -> f32 {
    let mut f_xx = 2.0 * w[0] * f[idx];
    for k in 1..TAPS {
        f_xx += w[k]
            * (f[idx + k] + f[idx - k] + f[idx + k * nx] + f[idx - k * nx]);
    }
    f_xx
}

/// Same sum as `laplacian_loop`, spelled out tap by tap.
///
/// The additions happen in the same order, so both agree bit for bit.
#[inline(always)]
pub fn laplacian_unrolled(
    f: &[f32],
    idx: usize,
    nx: usize,
    w: &[f32; TAPS],
) -> f32 {
    2.0 * w[0] * f[idx]
        + w[1] * (f[idx + 1] + f[idx - 1] + f[idx + nx] + f[idx - nx])
        + w[2]
            * (f[idx + 2] + f[idx - 2] + f[idx + 2 * nx] + f[idx - 2 * nx])
        + w[3]
            * (f[idx + 3] + f[idx - 3] + f[idx + 3 * nx] + f[idx - 3 * nx])
        + w[4]
            * (f[idx + 4] + f[idx - 4] + f[idx + 4 * nx] + f[idx - 4 * nx])
        + w[5]
            * (f[idx + 5] + f[idx - 5] + f[idx + 5 * nx] + f[idx - 5 * nx])
        + w[6]
            * (f[idx + 6] + f[idx - 6] + f[idx + 6 * nx] + f[idx - 6 * nx])
        + w[7]
            * (f[idx + 7] + f[idx - 7] + f[idx + 7 * nx] + f[idx - 7 * nx])
        + w[8]
            * (f[idx + 8] + f[idx - 8] + f[idx + 8 * nx] + f[idx - 8 * nx])
}

/// Explicit leapfrog step of the wave equation for one cell.
///
/// `model` is `v² dt²`, `f` the current sample and `fp` the previous one.
#[inline(always)]
pub fn leapfrog(model: f32, f_xx: f32, f: f32, fp: f32) -> f32 {
    model * f_xx + 2.0 * f - fp
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const N: usize = 2 * RADIUS + 1;

    fn grid(g: impl Fn(f32, f32) -> f32) -> Vec<f32> {
        let mut f = vec![0.0; N * N];
        for i in 0..N {
            for j in 0..N {
                let y = i as f32 - RADIUS as f32;
                let x = j as f32 - RADIUS as f32;
                f[i * N + j] = g(y, x);
            }
        }
        f
    }

    #[test]
    fn loop_and_unrolled_agree() {
        let w = FdCoefficients::new(0.7);
        let f = grid(|y, x| {
            (0.3 * x).sin() * (0.2 * y + 0.1).cos() + 0.01 * x * y
        });
        let center = RADIUS * N + RADIUS;
        let a = laplacian_loop(&f, center, N, w.weights());
        let b = laplacian_unrolled(&f, center, N, w.weights());
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn constant_field() {
        let w = FdCoefficients::new(1.0);
        let f = grid(|_, _| 3.0);
        let center = RADIUS * N + RADIUS;
        let r = laplacian_loop(&f, center, N, w.weights());
        assert_approx_eq!(f32, r, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn quadratic_field() {
        // ∇²(x² + y²) = 4
        let w = FdCoefficients::new(1.0);
        let f = grid(|y, x| x * x + y * y);
        let center = RADIUS * N + RADIUS;
        let r = laplacian_unrolled(&f, center, N, w.weights());
        assert_approx_eq!(f32, r, 4.0, epsilon = 1e-3);
    }

    #[test]
    fn single_spike() {
        // A unit spike at distance k along one axis picks out weight k.
        let w = FdCoefficients::new(1.0);
        let center = RADIUS * N + RADIUS;
        for k in 1..TAPS {
            let mut f = vec![0.0; N * N];
            f[center + k * N] = 1.0;
            let r = laplacian_loop(&f, center, N, w.weights());
            assert_eq!(r, w.weights()[k]);
        }
        let mut f = vec![0.0; N * N];
        f[center] = 1.0;
        let r = laplacian_loop(&f, center, N, w.weights());
        assert_eq!(r, 2.0 * w.central());
    }

    #[test]
    fn leapfrog_update() {
        assert_eq!(leapfrog(0.5, 2.0, 3.0, 1.0), 0.5 * 2.0 + 6.0 - 1.0);
        // Zero model term reduces to linear extrapolation in time.
        assert_eq!(leapfrog(0.0, 123.0, 2.0, 1.0), 3.0);
    }
}
