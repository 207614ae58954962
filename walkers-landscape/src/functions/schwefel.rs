//! Schwefel test function

use ndarray::{Array1, ArrayView1};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Schwefel function - N-dimensional, deceptive
/// Global minimum: f(x) ≈ 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: ArrayView1<f64>) -> f64 {
    418.9829 * x.len() as f64 - x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

fn minimum(dim: usize) -> Minimum {
    Minimum::Single(Array1::from_elem(dim, 420.9687))
}

/// Catalog entry for [`schwefel`].
pub static SCHWEFEL: LandscapeSpec = LandscapeSpec {
    name: "Schwefel",
    description: "Second-best minimum far from the global one",
    multimodal: true,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-500.0, 500.0),
    evaluate: schwefel,
    minimum,
    optimum: Some(0.0),
};
