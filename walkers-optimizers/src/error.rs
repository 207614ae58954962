//! Error types for the optimizers.
//!
//! Configuration problems are always detected before a run consumes any
//! randomness. Numerical degeneracies abort the run as soon as they appear.

use thiserror::Error;
use walkers_landscape::LandscapeError;

/// Errors that can occur while configuring or running an optimizer.
#[derive(Debug, Error)]
pub enum OptimizerError {
    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// A lower bound is not strictly below its upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) must be < upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Bounds were given for a different number of dimensions.
    #[error("bounds have {got} dimensions, run is configured for {expected}")]
    BoundsDimensionMismatch {
        /// Configured dimensionality
        expected: usize,
        /// Length of the bounds vectors
        got: usize,
    },

    /// Dimensionality must be at least one.
    #[error("dimensionality must be >= 1")]
    ZeroDimension,

    /// Population size is too small (must be >= 2).
    #[error("population size ({pop_size}) must be >= 2")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Iteration budget must be at least one.
    #[error("max_iters must be >= 1")]
    ZeroIterations,

    /// Initial population does not have shape `(n_population, dim)`.
    #[error(
        "initial population has shape {got_rows}x{got_cols}, expected {expected_rows}x{expected_cols}"
    )]
    InitialPopulationShape {
        /// Expected number of rows (population size)
        expected_rows: usize,
        /// Expected number of columns (dimensionality)
        expected_cols: usize,
        /// Rows provided
        got_rows: usize,
        /// Columns provided
        got_cols: usize,
    },

    /// Initial population holds NaN or an infinity.
    #[error("initial population has non-finite value {value} at row {row}, column {col}")]
    NonFiniteInitialPopulation {
        /// Row of the first offending entry
        row: usize,
        /// Column of the first offending entry
        col: usize,
        /// Offending value
        value: f64,
    },

    /// The objective is defined for a different dimensionality than the run.
    #[error("objective '{name}' has dim={objective_dim}, run is configured for dim={run_dim}")]
    ObjectiveDimensionMismatch {
        /// Objective name
        name: String,
        /// Objective dimensionality
        objective_dim: usize,
        /// Run dimensionality
        run_dim: usize,
    },

    /// A hyperparameter is out of its valid range.
    #[error("{optimizer}: invalid hyperparameter {name}={value} ({reason})")]
    InvalidHyperparameter {
        /// Optimizer short name
        optimizer: &'static str,
        /// Hyperparameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: String,
    },

    /// A hyperparameter vector or named setter did not match the optimizer.
    #[error("{optimizer}: {message}")]
    HyperparameterLayout {
        /// Optimizer short name
        optimizer: &'static str,
        /// What went wrong
        message: String,
    },

    /// No optimizer is registered under the requested name.
    #[error("unknown optimizer '{name}'; available: {available}")]
    UnknownOptimizer {
        /// Requested name
        name: String,
        /// Comma separated list of valid names
        available: String,
    },

    /// A denominator collapsed or a non-finite value appeared.
    #[error("{optimizer}: numerical degeneracy at iteration {iteration}: {detail}")]
    NumericalDegeneracy {
        /// Optimizer short name
        optimizer: &'static str,
        /// Zero-based iteration at which the problem appeared
        iteration: usize,
        /// Description of the degenerate quantity
        detail: String,
    },

    /// Landscape construction or lookup failed.
    #[error(transparent)]
    Landscape(#[from] LandscapeError),

    /// Reading or writing a record failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizerError>;

impl OptimizerError {
    /// Returns `true` if this is a bounds-related error.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            OptimizerError::BoundsMismatch { .. }
                | OptimizerError::InvalidBounds { .. }
                | OptimizerError::BoundsDimensionMismatch { .. }
        )
    }

    /// Returns `true` for every error raised while validating a run
    /// configuration, before any randomness is consumed.
    pub fn is_configuration_error(&self) -> bool {
        self.is_bounds_error()
            || matches!(
                self,
                OptimizerError::ZeroDimension
                    | OptimizerError::PopulationTooSmall { .. }
                    | OptimizerError::ZeroIterations
                    | OptimizerError::InitialPopulationShape { .. }
                    | OptimizerError::NonFiniteInitialPopulation { .. }
                    | OptimizerError::ObjectiveDimensionMismatch { .. }
                    | OptimizerError::InvalidHyperparameter { .. }
                    | OptimizerError::HyperparameterLayout { .. }
            )
    }

    /// Returns `true` if the run aborted on a numerical degeneracy.
    pub fn is_numerical_degeneracy(&self) -> bool {
        matches!(self, OptimizerError::NumericalDegeneracy { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OptimizerError::BoundsMismatch {
            lower_len: 3,
            upper_len: 5,
        };
        assert_eq!(
            err.to_string(),
            "bounds mismatch: lower has 3 elements, upper has 5"
        );
        let err = OptimizerError::InitialPopulationShape {
            expected_rows: 10,
            expected_cols: 2,
            got_rows: 11,
            got_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "initial population has shape 11x2, expected 10x2"
        );
    }

    #[test]
    fn test_is_configuration_error() {
        let config_err = OptimizerError::InvalidHyperparameter {
            optimizer: "CS",
            name: "beta",
            value: 2.5,
            reason: "must lie in (1, 2)".to_string(),
        };
        let numeric = OptimizerError::NumericalDegeneracy {
            optimizer: "GSA",
            iteration: 3,
            detail: "NaN fitness".to_string(),
        };
        assert!(config_err.is_configuration_error());
        assert!(!config_err.is_numerical_degeneracy());
        assert!(numeric.is_numerical_degeneracy());
        assert!(!numeric.is_configuration_error());
    }

    #[test]
    fn test_is_bounds_error() {
        let bounds_err = OptimizerError::InvalidBounds {
            index: 0,
            lower: 5.0,
            upper: 3.0,
        };
        assert!(bounds_err.is_bounds_error());
        assert!(bounds_err.is_configuration_error());
        assert!(!OptimizerError::ZeroIterations.is_bounds_error());
    }
}
