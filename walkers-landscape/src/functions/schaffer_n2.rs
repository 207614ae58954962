//! Schaffer N.2 test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Schaffer function N.2 - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub fn schaffer_n2(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let num = (x1 * x1 - x2 * x2).sin().powi(2) - 0.5;
    let den = (1.0 + 0.001 * (x1 * x1 + x2 * x2)).powi(2);
    0.5 + num / den
}

/// Catalog entry for [`schaffer_n2`].
pub static SCHAFFER_N2: LandscapeSpec = LandscapeSpec {
    name: "SchafferN2",
    description: "Schaffer function N.2",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-100.0, 100.0),
    evaluate: schaffer_n2,
    minimum: at_origin,
    optimum: Some(0.0),
};
