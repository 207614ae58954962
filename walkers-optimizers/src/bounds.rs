//! Box bounds and boundary repair.

use ndarray::{Array1, Array2, ArrayViewMut1, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{OptimizerError, Result};

/// Per-dimension box `[lower, upper]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    lower: Array1<f64>,
    upper: Array1<f64>,
}

impl Bounds {
    /// Validated per-dimension bounds.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::BoundsMismatch` if the vectors have different lengths.
    /// Returns `OptimizerError::InvalidBounds` if any lower bound is not strictly below its upper bound.
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(OptimizerError::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(OptimizerError::ZeroDimension);
        }
        for i in 0..lower.len() {
            // also rejects NaN
            if !(lower[i] < upper[i]) || !lower[i].is_finite() || !upper[i].is_finite() {
                return Err(OptimizerError::InvalidBounds {
                    index: i,
                    lower: lower[i],
                    upper: upper[i],
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// The same interval on each of `dim` axes.
    pub fn uniform(lower: f64, upper: f64, dim: usize) -> Result<Self> {
        Self::new(Array1::from_elem(dim, lower), Array1::from_elem(dim, upper))
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Lower bounds.
    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    /// Upper bounds.
    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    /// `upper - lower` per dimension.
    pub fn span(&self) -> Array1<f64> {
        &self.upper - &self.lower
    }

    /// Clip every row of `pop` into the box.
    pub fn clip(&self, pop: &mut Array2<f64>) {
        for row in pop.rows_mut() {
            self.clip_row(row);
        }
    }

    /// Clip a single candidate into the box.
    pub fn clip_row(&self, mut x: ArrayViewMut1<f64>) {
        Zip::from(&mut x)
            .and(&self.lower)
            .and(&self.upper)
            .for_each(|v, &lo, &hi| *v = v.clamp(lo, hi));
    }

    /// `true` if every row of `pop` lies inside the box.
    pub fn contains_all(&self, pop: &Array2<f64>) -> bool {
        pop.rows().into_iter().all(|row| {
            row.iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&v, (&lo, &hi))| v >= lo && v <= hi)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rejects_inverted_and_equal_bounds() {
        let err = Bounds::new(array![0.0, 1.0], array![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidBounds { index: 1, .. }));
        let err = Bounds::new(array![0.0], array![1.0, 2.0]).unwrap_err();
        assert!(err.is_bounds_error());
        assert!(Bounds::uniform(f64::NAN, 1.0, 2).is_err());
    }

    #[test]
    fn test_clip() {
        let b = Bounds::new(array![-1.0, 0.0], array![1.0, 10.0]).unwrap();
        let mut pop = array![[-3.0, 5.0], [0.5, 11.0]];
        assert!(!b.contains_all(&pop));
        b.clip(&mut pop);
        assert_eq!(pop, array![[-1.0, 5.0], [0.5, 10.0]]);
        assert!(b.contains_all(&pop));
    }
}
