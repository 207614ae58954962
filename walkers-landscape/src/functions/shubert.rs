//! Shubert test function

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, unknown};

/// Shubert function - 2D, eighteen global minima
/// Global minimum: not documented here
/// Bounds: x_i in [-10, 10]
pub fn shubert(x: ArrayView1<f64>) -> f64 {
    x.iter()
        .map(|&xj| {
            (1..=5)
                .map(|i| {
                    let i = i as f64;
                    i * ((i + 1.0) * xj + i).cos()
                })
                .sum::<f64>()
        })
        .product()
}

/// Catalog entry for [`shubert`].
pub static SHUBERT: LandscapeSpec = LandscapeSpec {
    name: "Shubert",
    description: "Several global minima among many local ones",
    multimodal: true,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: shubert,
    minimum: unknown,
    optimum: None,
};
