//! Bukin N.6 test function

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Bukin function N.6 - 2D, minima lie along a narrow curved ridge
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
pub fn bukin_n6(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    100.0 * (x2 - 0.01 * x1 * x1).abs().sqrt() + 0.01 * (x1 + 10.0).abs()
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Single(array![-10.0, 1.0])
}

/// Catalog entry for [`bukin_n6`].
pub static BUKIN_N6: LandscapeSpec = LandscapeSpec {
    name: "BukinN6",
    description: "Narrow parabolic valley of local minima",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::PerAxis(&[(-15.0, -5.0), (-3.0, 3.0)]),
    evaluate: bukin_n6,
    minimum,
    optimum: Some(0.0),
};
