//! Zakharov test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Zakharov function - N-dimensional plate-shaped
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 10]
pub fn zakharov(x: ArrayView1<f64>) -> f64 {
    let sum_sq: f64 = x.iter().map(|&xi| xi * xi).sum();
    let weighted: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 0.5 * (i + 1) as f64 * xi)
        .sum();
    sum_sq + weighted.powi(2) + weighted.powi(4)
}

/// Catalog entry for [`zakharov`].
pub static ZAKHAROV: LandscapeSpec = LandscapeSpec {
    name: "Zakharov",
    description: "Plate with a single valley, no local minima",
    multimodal: false,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-5.0, 10.0),
    evaluate: zakharov,
    minimum: at_origin,
    optimum: Some(0.0),
};
