//! Beale test function

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Beale function - 2D unimodal with sharp ridges at the corners
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
pub fn beale(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (1.5 - x1 + x1 * x2).powi(2)
        + (2.25 - x1 + x1 * x2.powi(2)).powi(2)
        + (2.625 - x1 + x1 * x2.powi(3)).powi(2)
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Single(array![3.0, 0.5])
}

/// Catalog entry for [`beale`].
pub static BEALE: LandscapeSpec = LandscapeSpec {
    name: "Beale",
    description: "Beale function",
    multimodal: false,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-4.5, 4.5),
    evaluate: beale,
    minimum,
    optimum: Some(0.0),
};
