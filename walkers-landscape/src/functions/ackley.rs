//! Ackley test function

use std::f64::consts::{E, PI};

use ndarray::ArrayView1;

use crate::landscape::{Dimensionality, Domain, LandscapeSpec, at_origin};

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: ArrayView1<f64>) -> f64 {
    let (a, b, c) = (20.0, 0.2, 2.0 * PI);
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (c * xi).cos()).sum();

    -a * (-b * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + a + E
}

/// Catalog entry for [`ackley`].
pub static ACKLEY: LandscapeSpec = LandscapeSpec {
    name: "Ackley",
    description: "Nearly flat outer region with a deep central hole and many local minima",
    multimodal: true,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-32.768, 32.768),
    evaluate: ackley,
    minimum: at_origin,
    optimum: Some(0.0),
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, array};

    #[test]
    fn test_ackley_origin_any_dim() {
        for d in [1, 2, 10, 30] {
            assert_abs_diff_eq!(ackley(Array1::zeros(d).view()), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ackley_off_center_is_positive() {
        assert!(ackley(array![1.0, -1.0].view()) > 3.0);
    }
}
