//! Drop-wave test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Drop-wave function - 2D, concentric ripples
/// Global minimum: f(x) = -1 at x = (0, 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn drop_wave(x: ArrayView1<f64>) -> f64 {
    let r2 = x[0] * x[0] + x[1] * x[1];
    -(1.0 + (12.0 * r2.sqrt()).cos()) / (0.5 * r2 + 2.0)
}

/// Catalog entry for [`drop_wave`].
pub static DROP_WAVE: LandscapeSpec = LandscapeSpec {
    name: "DropWave",
    description: "Concentric ripples around a single deep well",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-5.12, 5.12),
    evaluate: drop_wave,
    minimum: at_origin,
    optimum: Some(-1.0),
};
