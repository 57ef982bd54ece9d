/// Number of weights in the second derivative stencil, central tap included.
pub const TAPS: usize = 9;

/// How far the stencil reaches from the center along each axis.
pub const RADIUS: usize = TAPS - 1;

/// Common denominator of the weights.
pub const FD_DENOMINATOR: i64 = 302702400;

/// Numerators of the 17 point centered second derivative,
/// 16th order accurate in the grid spacing.
///
/// Index 0 is the center tap (applied once per axis, so it enters the 2D
/// Laplacian with a factor of 2), index `k` the pair at distance `k`.
/// With `n_k` the numerators and `D` the denominator the table satisfies
/// the moment conditions of a centered difference:
///
/// * `n_0 + 2 Σ n_k = 0` (a constant has zero curvature)
/// * `Σ k² n_k = D` (exact for `x²`)
/// * `Σ k^(2m) n_k = 0` for `m = 2..=8`
pub const FD_NUMERATORS: [i64; TAPS] = [
    -924708642, 538137600, -94174080, 22830080, -5350800, 1053696, -156800,
    15360, -735,
];

/// The weights for a given grid spacing, i.e. `n_k / D / dx²` in `f32`.
///
/// Division order is fixed, numerator by denominator first, then by
/// `dx * dx`, so weights built from float literals agree bit for bit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FdCoefficients {
    weights: [f32; TAPS],
}

impl FdCoefficients {
    pub fn new(dx: f32) -> Self {
        let dx2 = dx * dx;
        let denominator = FD_DENOMINATOR as f32;
        FdCoefficients {
            weights: std::array::from_fn(|k| {
                FD_NUMERATORS[k] as f32 / denominator / dx2
            }),
        }
    }

    #[inline]
    pub fn weights(&self) -> &[f32; TAPS] {
        &self.weights
    }

    #[inline]
    pub fn central(&self) -> f32 {
        self.weights[0]
    }

    /// Value of the 2D stencil applied to a field that is 1 everywhere.
    pub fn constant_response(&self) -> f32 {
        let mut r = 2.0 * self.weights[0];
        for k in 1..TAPS {
            r += self.weights[k] * 4.0;
        }
        r
    }
}
