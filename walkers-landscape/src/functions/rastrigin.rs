//! Rastrigin test function

use std::f64::consts::PI;

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Rastrigin function - N-dimensional, regularly spaced local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: ArrayView1<f64>) -> f64 {
    let a = 10.0;
    a * x.len() as f64
        + x.iter()
            .map(|&xi| xi * xi - a * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Catalog entry for [`rastrigin`].
pub static RASTRIGIN: LandscapeSpec = LandscapeSpec {
    name: "Rastrigin",
    description: "Egg-crate of regularly distributed local minima",
    multimodal: true,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-5.12, 5.12),
    evaluate: rastrigin,
    minimum: at_origin,
    optimum: Some(0.0),
};

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rastrigin_integer_lattice() {
        // cos(2πk) = 1 on integers, so only the quadratic part remains
        let v = rastrigin(array![1.0, -2.0, 0.0].view());
        assert!((v - 5.0).abs() < 1e-9);
    }
}
