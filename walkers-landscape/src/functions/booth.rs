//! Booth test function

use ndarray::{ArrayView1, array};

use crate::landscape::{Dimensionality, Domain, LandscapeSpec};
use crate::objective::Minimum;

/// Booth function - 2D plate-shaped quadratic
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: ArrayView1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}

fn minimum(_dim: usize) -> Minimum {
    Minimum::Single(array![1.0, 3.0])
}

/// Catalog entry for [`booth`].
pub static BOOTH: LandscapeSpec = LandscapeSpec {
    name: "Booth",
    description: "Plate-shaped quadratic",
    multimodal: false,
    dims: Dimensionality::Fixed(2),
    domain: Domain::Uniform(-10.0, 10.0),
    evaluate: booth,
    minimum,
    optimum: Some(0.0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booth_values() {
        assert_eq!(booth(array![1.0, 3.0].view()), 0.0);
        assert_eq!(booth(array![0.0, 0.0].view()), 74.0);
    }
}
