//! Easom test function

use std::f64::consts::PI;

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Easom function - 2D, flat everywhere except a small well
/// Global minimum: f(x) = -1 at x = (π, π)
/// Bounds: x_i in [-100, 100]
pub fn easom(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -x1.cos() * x2.cos() * (-((x1 - PI).powi(2) + (x2 - PI).powi(2))).exp()
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Single(array![PI, PI])
}

/// Catalog entry for [`easom`].
pub static EASOM: LandscapeSpec = LandscapeSpec {
    name: "Easom",
    description: "Needle-in-a-haystack well on a flat plateau",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-100.0, 100.0),
    evaluate: easom,
    minimum,
    optimum: Some(-1.0),
};
