//! The objective-function abstraction shared by every optimizer.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::error::{LandscapeError, Result};

/// Reference minimizer(s) of a landscape.
///
/// Landscapes whose global minimizer is not documented report
/// [`Minimum::Unknown`] instead of a fabricated point.
#[derive(Debug, Clone, PartialEq)]
pub enum Minimum {
    /// A single global minimizer.
    Single(Array1<f64>),
    /// Several global minimizers sharing the same value.
    Multiple(Vec<Array1<f64>>),
    /// No documented minimizer.
    Unknown,
}

impl Minimum {
    /// All known minimizers, empty when unknown.
    pub fn points(&self) -> &[Array1<f64>] {
        match self {
            Minimum::Single(x) => std::slice::from_ref(x),
            Minimum::Multiple(xs) => xs,
            Minimum::Unknown => &[],
        }
    }

    /// `true` when at least one minimizer is documented.
    pub fn is_known(&self) -> bool {
        !matches!(self, Minimum::Unknown)
    }

    /// Euclidean distance from `x` to the closest documented minimizer.
    pub fn distance_to(&self, x: ArrayView1<f64>) -> Option<f64> {
        self.points()
            .iter()
            .map(|m| {
                m.iter()
                    .zip(x.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// A named, bounded scalar function of a fixed-length real vector.
///
/// `evaluate` is pure and does not check feasibility: boundary repair is the
/// optimizer's job. Implementors must be shareable across threads so that
/// independent runs can be executed concurrently.
pub trait ObjectiveFunction: Send + Sync {
    /// Display name, e.g. `"Ackley"`.
    fn name(&self) -> &str;

    /// Dimensionality fixed at construction.
    fn dim(&self) -> usize;

    /// Per-dimension lower and upper bounds.
    fn bounds(&self) -> (Array1<f64>, Array1<f64>);

    /// Single interval enclosing the whole domain.
    ///
    /// When bounds differ per dimension this is the widest pair.
    fn boundary(&self) -> (f64, f64) {
        let (lower, upper) = self.bounds();
        let lo = lower.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = upper.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    }

    /// Objective value at `x` (length `dim()`).
    fn evaluate(&self, x: ArrayView1<f64>) -> f64;

    /// Documented global minimizer(s).
    fn minimum(&self) -> Minimum {
        Minimum::Unknown
    }

    /// Documented global minimum value, when known.
    fn optimum(&self) -> Option<f64> {
        None
    }

    /// Evaluate every lane of `xs` along `axis`.
    ///
    /// With `Axis(1)` each row is a candidate, with `Axis(0)` each column is.
    fn evaluate_batch(&self, xs: ArrayView2<f64>, axis: Axis) -> Result<Array1<f64>> {
        let got = xs.len_of(axis);
        if got != self.dim() {
            return Err(LandscapeError::BatchShapeMismatch {
                expected: self.dim(),
                got,
                axis: axis.index(),
            });
        }
        Ok(xs.lanes(axis).into_iter().map(|x| self.evaluate(x)).collect())
    }
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn dim(&self) -> usize {
        (**self).dim()
    }
    fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
        (**self).bounds()
    }
    fn boundary(&self) -> (f64, f64) {
        (**self).boundary()
    }
    fn evaluate(&self, x: ArrayView1<f64>) -> f64 {
        (**self).evaluate(x)
    }
    fn minimum(&self) -> Minimum {
        (**self).minimum()
    }
    fn optimum(&self) -> Option<f64> {
        (**self).optimum()
    }
    fn evaluate_batch(&self, xs: ArrayView2<f64>, axis: Axis) -> Result<Array1<f64>> {
        (**self).evaluate_batch(xs, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    struct Paraboloid;

    impl ObjectiveFunction for Paraboloid {
        fn name(&self) -> &str {
            "Paraboloid"
        }
        fn dim(&self) -> usize {
            2
        }
        fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
            (array![-1.0, -3.0], array![2.0, 1.0])
        }
        fn evaluate(&self, x: ArrayView1<f64>) -> f64 {
            x[0] * x[0] + 10.0 * x[1] * x[1]
        }
    }

    #[test]
    fn test_boundary_is_widest_pair() {
        assert_eq!(Paraboloid.boundary(), (-3.0, 2.0));
    }

    #[test]
    fn test_batch_rows_and_columns() {
        let xs = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let rows = Paraboloid.evaluate_batch(xs.view(), Axis(1)).unwrap();
        assert_eq!(rows, array![1.0, 10.0, 11.0]);

        let cols = Paraboloid
            .evaluate_batch(xs.t(), Axis(0))
            .unwrap();
        assert_eq!(cols, rows);
    }

    #[test]
    fn test_batch_rejects_wrong_lane_length() {
        let xs = array![[1.0, 0.0, 2.0]];
        let err = Paraboloid.evaluate_batch(xs.view(), Axis(1)).unwrap_err();
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_minimum_distance() {
        let m = Minimum::Multiple(vec![array![0.0, 0.0], array![3.0, 4.0]]);
        let d = m.distance_to(array![3.0, 3.0].view()).unwrap();
        assert!((d - 1.0).abs() < 1e-12);
        assert_eq!(Minimum::Unknown.distance_to(array![0.0].view()), None);
        assert!(Minimum::Unknown.points().is_empty());
    }
}
