//! Six-hump camel test function

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Six-hump camel function - 2D
/// Global minima: f(x) = -1.0316 at x = (0.0898, -0.7126), (-0.0898, 0.7126)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub fn six_hump_camel(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (4.0 - 2.1 * x1 * x1 + x1.powi(4) / 3.0) * x1 * x1 + x1 * x2 + (-4.0 + 4.0 * x2 * x2) * x2 * x2
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Multiple(vec![array![0.0898, -0.7126], array![-0.0898, 0.7126]])
}

/// Catalog entry for [`six_hump_camel`].
pub static SIX_HUMP_CAMEL: LandscapeSpec = LandscapeSpec {
    name: "SixHumpCamel",
    description: "Six local minima, two of them global",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::PerAxis(&[(-3.0, 3.0), (-2.0, 2.0)]),
    evaluate: six_hump_camel,
    minimum,
    optimum: Some(-1.0316),
};
