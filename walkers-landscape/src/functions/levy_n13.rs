//! Levy N.13 test function

use std::f64::consts::PI;

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_ones};

/// Levy function N.13 - 2D multimodal
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-10, 10]
pub fn levy_n13(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (3.0 * PI * x1).sin().powi(2)
        + (x1 - 1.0).powi(2) * (1.0 + (3.0 * PI * x2).sin().powi(2))
        + (x2 - 1.0).powi(2) * (1.0 + (2.0 * PI * x2).sin().powi(2))
}

/// Catalog entry for [`levy_n13`].
pub static LEVY_N13: LandscapeSpec = LandscapeSpec {
    name: "LevyN13",
    description: "Levy function N.13",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: levy_n13,
    minimum: at_ones,
    optimum: Some(0.0),
};
