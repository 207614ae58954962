//! Eggholder test function

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Eggholder function - 2D, highly multimodal
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319)
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let y = x2 + 47.0;
    -y * (x1 / 2.0 + y).abs().sqrt().sin() - x1 * (x1 - y).abs().sqrt().sin()
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Single(array![512.0, 404.2319])
}

/// Catalog entry for [`eggholder`].
pub static EGGHOLDER: LandscapeSpec = LandscapeSpec {
    name: "Eggholder",
    description: "Rugged landscape with the optimum on the domain edge",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-512.0, 512.0),
    evaluate: eggholder,
    minimum,
    optimum: Some(-959.6407),
};
