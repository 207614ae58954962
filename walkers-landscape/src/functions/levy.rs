//! Levy test function

use std::f64::consts::PI;

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_ones};

/// Levy function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-10, 10]
pub fn levy(x: ArrayView1<f64>) -> f64 {
    let w: Vec<f64> = x.iter().map(|&xi| 1.0 + (xi - 1.0) / 4.0).collect();
    let last = w[w.len() - 1];
    let head = (PI * w[0]).sin().powi(2);
    let body: f64 = w[..w.len() - 1]
        .iter()
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    let tail = (last - 1.0).powi(2) * (1.0 + (2.0 * PI * last).sin().powi(2));
    head + body + tail
}

/// Catalog entry for [`levy`].
pub static LEVY: LandscapeSpec = LandscapeSpec {
    name: "Levy",
    description: "Levy function",
    multimodal: true,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: levy,
    minimum: at_ones,
    optimum: Some(0.0),
};
