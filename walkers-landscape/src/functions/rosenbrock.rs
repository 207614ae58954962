//! Rosenbrock test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_ones};

/// Rosenbrock function - N-dimensional banana valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 10]
pub fn rosenbrock(x: ArrayView1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (w[0] - 1.0).powi(2))
        .sum()
}

/// Catalog entry for [`rosenbrock`].
pub static ROSENBROCK: LandscapeSpec = LandscapeSpec {
    name: "Rosenbrock",
    description: "Long curved valley, easy to find and hard to follow",
    multimodal: false,
    dims: Dimensionality::AtLeast(2),
    domain: Domain::Uniform(-5.0, 10.0),
    evaluate: rosenbrock,
    minimum: at_ones,
    optimum: Some(0.0),
};
