//! Schaffer N.4 test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, unknown};

/// Schaffer function N.4 - 2D
/// Global minimum: not documented here
/// Bounds: x_i in [-100, 100]
pub fn schaffer_n4(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let num = (x1 * x1 - x2 * x2).abs().sin().cos().powi(2) - 0.5;
    let den = (1.0 + 0.001 * (x1 * x1 + x2 * x2)).powi(2);
    0.5 + num / den
}

/// Catalog entry for [`schaffer_n4`].
pub static SCHAFFER_N4: LandscapeSpec = LandscapeSpec {
    name: "SchafferN4",
    description: "Schaffer function N.4",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-100.0, 100.0),
    evaluate: schaffer_n4,
    minimum: unknown,
    optimum: None,
};
