//! Griewank test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Griewank function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: ArrayView1<f64>) -> f64 {
    let sum: f64 = x.iter().map(|&xi| xi * xi).sum::<f64>() / 4000.0;
    let prod: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum - prod + 1.0
}

/// Catalog entry for [`griewank`].
pub static GRIEWANK: LandscapeSpec = LandscapeSpec {
    name: "Griewank",
    description: "Widespread regularly distributed local minima",
    multimodal: true,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-600.0, 600.0),
    evaluate: griewank,
    minimum: at_origin,
    optimum: Some(0.0),
};
