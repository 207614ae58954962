//! Three-hump camel test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Three-hump camel function - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5, 5]
pub fn three_hump_camel(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    2.0 * x1 * x1 - 1.05 * x1.powi(4) + x1.powi(6) / 6.0 + x1 * x2 + x2 * x2
}

/// Catalog entry for [`three_hump_camel`].
pub static THREE_HUMP_CAMEL: LandscapeSpec = LandscapeSpec {
    name: "ThreeHumpCamel",
    description: "Three local minima",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-5.0, 5.0),
    evaluate: three_hump_camel,
    minimum: at_origin,
    optimum: Some(0.0),
};
