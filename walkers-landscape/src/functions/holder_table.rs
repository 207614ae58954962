//! Holder table test function

use std::f64::consts::PI;

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Holder table function - 2D multimodal
/// Global minima: f(x) = -19.2085 at x = (±8.05502, ±9.66459)
/// Bounds: x_i in [-10, 10]
pub fn holder_table(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let r = (x1 * x1 + x2 * x2).sqrt();
    -(x1.sin() * x2.cos() * (1.0 - r / PI).abs().exp()).abs()
}

fn minimum(_dim: usize) -> Minimum {
    let (a, b) = (8.05502, 9.66459);
    Minimum::Multiple(vec![
        array![a, b],
        array![a, -b],
        array![-a, b],
        array![-a, -b],
    ])
}

/// Catalog entry for [`holder_table`].
pub static HOLDER_TABLE: LandscapeSpec = LandscapeSpec {
    name: "HolderTable",
    description: "Four global minima in the corners of the domain",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: holder_table,
    minimum,
    optimum: Some(-19.2085),
};
