//! Dixon-Price test function

use ndarray::{Array1, ArrayView1};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Dixon-Price function - N-dimensional valley
/// Global minimum: f(x) = 0 at x_i = 2^(-(2^i - 2) / 2^i), i = 1..n
/// Bounds: x_i in [-10, 10]
pub fn dixon_price(x: ArrayView1<f64>) -> f64 {
    let head = (x[0] - 1.0).powi(2);
    let tail: f64 = x
        .windows(2)
        .into_iter()
        .enumerate()
        .map(|(k, w)| (k as f64 + 2.0) * (2.0 * w[1] * w[1] - w[0]).powi(2))
        .sum();
    head + tail
}

fn minimum(dim: usize) -> Minimum {
    Minimum::Single(Array1::from_shape_fn(dim, |k| {
        let p = 2f64.powi(k as i32 + 1);
        2f64.powf(-(p - 2.0) / p)
    }))
}

/// Catalog entry for [`dixon_price`].
pub static DIXON_PRICE: LandscapeSpec = LandscapeSpec {
    name: "DixonPrice",
    description: "Curved valley whose minimizer components shrink geometrically",
    multimodal: false,
    dims: Dimensionality::AtLeast(1),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: dixon_price,
    minimum,
    optimum: Some(0.0),
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dixon_price_minimizer() {
        for d in [1, 2, 5, 8] {
            let m = minimum(d);
            let x = &m.points()[0];
            assert_eq!(x[0], 1.0);
            assert_abs_diff_eq!(dixon_price(x.view()), 0.0, epsilon = 1e-10);
        }
    }
}
