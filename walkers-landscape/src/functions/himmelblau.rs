//! Himmelblau test function

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Himmelblau function - 2D multimodal
/// Global minima: f(x) = 0 at x = (3, 2), (-2.805118, 3.131312), (-3.779310, -3.283186), (3.584428, -1.848126)
/// Bounds: x_i in [-5, 5]
pub fn himmelblau(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 * x1 + x2 - 11.0).powi(2) + (x1 + x2 * x2 - 7.0).powi(2)
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Multiple(vec![
        array![3.0, 2.0],
        array![-2.805118, 3.131312],
        array![-3.779310, -3.283186],
        array![3.584428, -1.848126],
    ])
}

/// Catalog entry for [`himmelblau`].
pub static HIMMELBLAU: LandscapeSpec = LandscapeSpec {
    name: "Himmelblau",
    description: "Four identical global minima",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-5.0, 5.0),
    evaluate: himmelblau,
    minimum,
    optimum: Some(0.0),
};
