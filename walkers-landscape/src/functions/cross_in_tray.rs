//! Cross-in-tray test function

use std::f64::consts::PI;

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Cross-in-tray function - 2D multimodal
/// Global minima: f(x) = -2.06261 at x = (±1.3491, ±1.3491)
/// Bounds: x_i in [-10, 10]
pub fn cross_in_tray(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let r = (x1 * x1 + x2 * x2).sqrt();
    let inner = (x1.sin() * x2.sin() * (100.0 - r / PI).abs().exp()).abs() + 1.0;
    -1e-4 * inner.powf(0.1)
}

fn minimum(_dim: usize) -> Minimum {
    let c = 1.3491;
    Minimum::Multiple(vec![
        array![c, -c],
        array![c, c],
        array![-c, c],
        array![-c, -c],
    ])
}

/// Catalog entry for [`cross_in_tray`].
pub static CROSS_IN_TRAY: LandscapeSpec = LandscapeSpec {
    name: "CrossInTray",
    description: "Four symmetric global minima on the diagonals",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: cross_in_tray,
    minimum,
    optimum: Some(-2.06261),
};
