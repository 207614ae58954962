//! McCormick test function

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// McCormick function - 2D
/// Global minimum: f(x) = -1.9133 at x = (-0.54719, -1.54719)
/// Bounds: x1 in [-1.5, 4], x2 in [-3, 4]
pub fn mccormick(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + x2).sin() + (x1 - x2).powi(2) - 1.5 * x1 + 2.5 * x2 + 1.0
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Single(array![-0.54719, -1.54719])
}

/// Catalog entry for [`mccormick`].
pub static MCCORMICK: LandscapeSpec = LandscapeSpec {
    name: "McCormick",
    description: "McCormick function",
    multimodal: false,
    dims: Dimensionality::Fixed(2),
    domain: Domain::PerAxis(&[(-1.5, 4.0), (-3.0, 4.0)]),
    evaluate: mccormick,
    minimum,
    optimum: Some(-1.9133),
};
