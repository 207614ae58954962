//! Run configuration shared by every optimizer.

use ndarray::{Array1, Array2};
use walkers_landscape::ObjectiveFunction;

use crate::bounds::Bounds;
use crate::error::{OptimizerError, Result};

/// Validated configuration of one optimization run.
///
/// Built through [`RunConfigBuilder`]; every invariant (bounds, sizes, initial
/// population shape) holds once a `RunConfig` exists.
#[derive(Debug, Clone)]
pub struct RunConfig {
    bounds: Bounds,
    n_population: usize,
    max_iters: usize,
    seed: u64,
    initial_population: Option<Array2<f64>>,
    verbose: bool,
}

impl RunConfig {
    /// Start a builder.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Search box.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
    /// Dimensionality.
    pub fn dim(&self) -> usize {
        self.bounds.dim()
    }
    /// Number of population members.
    pub fn n_population(&self) -> usize {
        self.n_population
    }
    /// Iteration budget.
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
    /// Seed of the run's random stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// User-supplied starting population, shape `(n_population, dim)`.
    pub fn initial_population(&self) -> Option<&Array2<f64>> {
        self.initial_population.as_ref()
    }
    /// Whether per-iteration progress is logged.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Copy of this configuration with a different seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone)]
enum BoundsInput {
    Scalar(f64, f64),
    PerDim(Array1<f64>, Array1<f64>),
}

/// Fluent builder for [`RunConfig`].
///
/// # Example
///
/// ```rust
/// use walkers_optimizers::RunConfigBuilder;
///
/// let config = RunConfigBuilder::new()
///     .bounds(-32.768, 32.768)
///     .dim(2)
///     .population(50)
///     .max_iters(200)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.bounds().lower().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RunConfigBuilder {
    bounds: BoundsInput,
    dim: Option<usize>,
    n_population: usize,
    max_iters: usize,
    seed: u64,
    initial_population: Option<Array2<f64>>,
    verbose: bool,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunConfigBuilder {
    /// Defaults: bounds (-5, 5), 50 members, 500 iterations, seed 0.
    pub fn new() -> Self {
        Self {
            bounds: BoundsInput::Scalar(-5.0, 5.0),
            dim: None,
            n_population: 50,
            max_iters: 500,
            seed: 0,
            initial_population: None,
            verbose: false,
        }
    }

    /// Builder pre-filled with the dimensionality and bounds of `objective`.
    pub fn for_objective(objective: &dyn ObjectiveFunction) -> Self {
        let (lower, upper) = objective.bounds();
        Self::new().dim(objective.dim()).bounds_per_dim(lower, upper)
    }

    /// Same interval on every axis.
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = BoundsInput::Scalar(lower, upper);
        self
    }
    /// One interval per axis; also fixes the dimensionality when `dim` is unset.
    pub fn bounds_per_dim(mut self, lower: Array1<f64>, upper: Array1<f64>) -> Self {
        self.bounds = BoundsInput::PerDim(lower, upper);
        self
    }
    /// Sets the dimensionality.
    pub fn dim(mut self, v: usize) -> Self {
        self.dim = Some(v);
        self
    }
    /// Sets the population size.
    pub fn population(mut self, v: usize) -> Self {
        self.n_population = v;
        self
    }
    /// Sets the iteration budget.
    pub fn max_iters(mut self, v: usize) -> Self {
        self.max_iters = v;
        self
    }
    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }
    /// Starts from the given population instead of a uniform draw.
    pub fn initial_population(mut self, pop: Array2<f64>) -> Self {
        self.initial_population = Some(pop);
        self
    }
    /// Enables/disables per-iteration progress logging.
    pub fn verbose(mut self, v: bool) -> Self {
        self.verbose = v;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Any bounds, size or shape violation. Nothing random happens here, so a
    /// failed build never perturbs a later run.
    pub fn build(self) -> Result<RunConfig> {
        let dim = match (&self.bounds, self.dim) {
            (_, Some(d)) => d,
            (BoundsInput::PerDim(lower, _), None) => lower.len(),
            (BoundsInput::Scalar(..), None) => self
                .initial_population
                .as_ref()
                .map_or(0, |p| p.ncols()),
        };
        if dim == 0 {
            return Err(OptimizerError::ZeroDimension);
        }

        let bounds = match self.bounds {
            BoundsInput::Scalar(lo, hi) => Bounds::uniform(lo, hi, dim)?,
            BoundsInput::PerDim(lower, upper) => {
                let bounds = Bounds::new(lower, upper)?;
                if bounds.dim() != dim {
                    return Err(OptimizerError::BoundsDimensionMismatch {
                        expected: dim,
                        got: bounds.dim(),
                    });
                }
                bounds
            }
        };

        if self.n_population < 2 {
            return Err(OptimizerError::PopulationTooSmall {
                pop_size: self.n_population,
            });
        }
        if self.max_iters == 0 {
            return Err(OptimizerError::ZeroIterations);
        }
        if let Some(pop) = &self.initial_population {
            if pop.dim() != (self.n_population, dim) {
                return Err(OptimizerError::InitialPopulationShape {
                    expected_rows: self.n_population,
                    expected_cols: dim,
                    got_rows: pop.nrows(),
                    got_cols: pop.ncols(),
                });
            }
            if let Some(((row, col), &value)) = pop.indexed_iter().find(|(_, v)| !v.is_finite()) {
                return Err(OptimizerError::NonFiniteInitialPopulation { row, col, value });
            }
        }

        Ok(RunConfig {
            bounds,
            n_population: self.n_population,
            max_iters: self.max_iters,
            seed: self.seed,
            initial_population: self.initial_population,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use walkers_landscape::landscape_by_name;

    #[test]
    fn test_defaults_need_a_dimension() {
        let err = RunConfigBuilder::new().build().unwrap_err();
        assert!(matches!(err, OptimizerError::ZeroDimension));
        let cfg = RunConfigBuilder::new().dim(3).build().unwrap();
        assert_eq!(cfg.dim(), 3);
        assert_eq!(cfg.n_population(), 50);
        assert_eq!(cfg.seed(), 0);
    }

    #[test]
    fn test_per_dim_bounds_fix_dimension() {
        let cfg = RunConfigBuilder::new()
            .bounds_per_dim(array![-15.0, -3.0], array![-5.0, 3.0])
            .build()
            .unwrap();
        assert_eq!(cfg.dim(), 2);

        let err = RunConfigBuilder::new()
            .bounds_per_dim(array![-1.0, -1.0], array![1.0, 1.0])
            .dim(3)
            .build()
            .unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_size_checks() {
        let base = || RunConfigBuilder::new().dim(2);
        assert!(matches!(
            base().population(1).build(),
            Err(OptimizerError::PopulationTooSmall { pop_size: 1 })
        ));
        assert!(matches!(
            base().max_iters(0).build(),
            Err(OptimizerError::ZeroIterations)
        ));
        assert!(base().bounds(1.0, -1.0).build().unwrap_err().is_bounds_error());
    }

    #[test]
    fn test_initial_population_shape_is_never_transposed() {
        let err = RunConfigBuilder::new()
            .dim(3)
            .population(4)
            .initial_population(Array2::zeros((3, 4)))
            .build()
            .unwrap_err();
        assert!(err.is_configuration_error());

        let ok = RunConfigBuilder::new()
            .dim(3)
            .population(4)
            .initial_population(Array2::zeros((4, 3)))
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_non_finite_initial_population_is_rejected() {
        let base = |pop: Array2<f64>| {
            RunConfigBuilder::new()
                .dim(2)
                .population(3)
                .initial_population(pop)
                .build()
        };
        let mut pop = Array2::zeros((3, 2));
        pop[[2, 1]] = f64::NAN;
        let err = base(pop).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(matches!(
            err,
            OptimizerError::NonFiniteInitialPopulation { row: 2, col: 1, .. }
        ));

        let mut pop = Array2::zeros((3, 2));
        pop[[0, 0]] = f64::NEG_INFINITY;
        assert!(base(pop).unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_for_objective() {
        let f = landscape_by_name("McCormick", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f).build().unwrap();
        assert_eq!(cfg.bounds().lower(), &array![-1.5, -3.0]);
        assert_eq!(cfg.bounds().upper(), &array![4.0, 4.0]);
    }
}
