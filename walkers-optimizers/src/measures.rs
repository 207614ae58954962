//! Random-walk statistics of the incumbent trajectory.
//!
//! The convergence trace is a walk of best positions through the search
//! space; these measures describe how far and how fast it moves.

use ndarray::{Array1, Array2, ArrayView2, Axis, s};

use crate::record::RunRecord;

/// Velocity, mean square displacement and mean speed of a walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkMeasures {
    /// First differences along time, shape `(T − 1, d)`
    pub velocity: Array2<f64>,
    /// Time-averaged mean square displacement for lags `0..T`
    pub msd: Array1<f64>,
    /// Mean Euclidean norm of the velocity rows, 0 for a single step
    pub mean_speed: f64,
}

impl WalkMeasures {
    /// Measures of a walk given as one position per row.
    pub fn from_walk(walk: ArrayView2<f64>) -> Self {
        let t = walk.nrows();
        let velocity = if t > 1 {
            &walk.slice(s![1.., ..]) - &walk.slice(s![..-1, ..])
        } else {
            Array2::zeros((0, walk.ncols()))
        };

        let msd = Array1::from_shape_fn(t, |lag| {
            if lag == 0 {
                return 0.0;
            }
            let ahead = walk.slice(s![lag.., ..]);
            let behind = walk.slice(s![..t - lag, ..]);
            let sq = (&ahead - &behind).mapv(|v| v * v).sum();
            sq / (t - lag) as f64
        });

        let mean_speed = if velocity.nrows() == 0 {
            0.0
        } else {
            velocity
                .map_axis(Axis(1), |row| row.dot(&row).sqrt())
                .mean()
                .unwrap_or(0.0)
        };

        Self {
            velocity,
            msd,
            mean_speed,
        }
    }

    /// Measures of the incumbent walk of `record`.
    pub fn from_record(record: &RunRecord) -> Self {
        Self::from_walk(record.walk().view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_straight_line_walk() {
        let walk = array![[0.0, 0.0], [3.0, 4.0], [6.0, 8.0]];
        let m = WalkMeasures::from_walk(walk.view());
        assert_eq!(m.velocity, array![[3.0, 4.0], [3.0, 4.0]]);
        assert_relative_eq!(m.mean_speed, 5.0);
        assert_eq!(m.msd[0], 0.0);
        assert_relative_eq!(m.msd[1], 25.0);
        assert_relative_eq!(m.msd[2], 100.0);
    }

    #[test]
    fn test_single_step_walk() {
        let walk = array![[1.0, 2.0]];
        let m = WalkMeasures::from_walk(walk.view());
        assert_eq!(m.velocity.dim(), (0, 2));
        assert_eq!(m.mean_speed, 0.0);
        assert_eq!(m.msd, array![0.0]);
    }

    #[test]
    fn test_stationary_walk() {
        let walk = Array2::from_elem((5, 3), 0.5);
        let m = WalkMeasures::from_walk(walk.view());
        assert!(m.msd.iter().all(|&v| v == 0.0));
        assert_eq!(m.mean_speed, 0.0);
    }
}
