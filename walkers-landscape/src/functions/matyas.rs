//! Matyas test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Matyas function - 2D plate-shaped
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-10, 10]
pub fn matyas(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    0.26 * (x1 * x1 + x2 * x2) - 0.48 * x1 * x2
}

/// Catalog entry for [`matyas`].
pub static MATYAS: LandscapeSpec = LandscapeSpec {
    name: "Matyas",
    description: "Flat plate with a shallow diagonal valley",
    multimodal: false,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: matyas,
    minimum: at_origin,
    optimum: Some(0.0),
};
