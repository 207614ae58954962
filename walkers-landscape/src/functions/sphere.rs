//! Sphere test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Sphere function - N-dimensional convex bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: ArrayView1<f64>) -> f64 {
    x.dot(&x)
}

/// Catalog entry for [`sphere`].
pub static SPHERE: LandscapeSpec = LandscapeSpec {
    name: "Sphere",
    description: "Convex bowl",
    multimodal: false,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-5.12, 5.12),
    evaluate: sphere,
    minimum: at_origin,
    optimum: Some(0.0),
};
