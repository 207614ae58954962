//! Shared run harness: seeded randomness, repair, evaluation, incumbent
//! tracking and trace recording.
//!
//! Optimizers drive a [`Run`] through the same protocol (cuckoo search
//! evaluates its nests once up front and carries their fitness instead):
//!
//! 1. repair the population into the box,
//! 2. evaluate it,
//! 3. update the incumbent on strict improvement,
//! 4. build the next population,
//! 5. append the incumbent to the trace.
//!
//! [`Run::finish`] repairs and evaluates the last population once more before
//! sealing the [`RunRecord`].

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use walkers_landscape::ObjectiveFunction;

use crate::argmin::argmin;
use crate::bounds::Bounds;
use crate::config::RunConfig;
use crate::error::{OptimizerError, Result};
use crate::init_random::init_random;
use crate::record::{BestSolution, RunRecord};
use crate::recorder::RunRecorder;

/// State shared by every optimizer during one run.
pub(crate) struct Run<'a> {
    name: &'static str,
    objective: &'a dyn ObjectiveFunction,
    config: &'a RunConfig,
    pub(crate) rng: StdRng,
    recorder: RunRecorder,
    best: BestSolution,
    iteration: usize,
}

impl<'a> Run<'a> {
    /// Check the objective against the configuration and seed the random stream.
    ///
    /// Hyperparameters must already be validated: nothing random may happen
    /// before every configuration check passed.
    pub(crate) fn start(
        name: &'static str,
        objective: &'a dyn ObjectiveFunction,
        config: &'a RunConfig,
        hyperparameters: Vec<(String, f64)>,
    ) -> Result<Self> {
        if objective.dim() != config.dim() {
            return Err(OptimizerError::ObjectiveDimensionMismatch {
                name: objective.name().to_string(),
                objective_dim: objective.dim(),
                run_dim: config.dim(),
            });
        }
        log::debug!(
            "{} is optimizing \"{}\" (dim={}, n_pop={}, max_iters={}, seed={})",
            name,
            objective.name(),
            config.dim(),
            config.n_population(),
            config.max_iters(),
            config.seed()
        );
        let recorder = RunRecorder::start(
            name,
            objective.name(),
            config.dim(),
            config.n_population(),
            config.max_iters(),
            config.seed(),
            hyperparameters,
        );
        Ok(Self {
            name,
            objective,
            config,
            rng: StdRng::seed_from_u64(config.seed()),
            recorder,
            best: BestSolution {
                position: Array1::zeros(config.dim()),
                score: f64::INFINITY,
            },
            iteration: 0,
        })
    }

    pub(crate) fn bounds(&self) -> &'a Bounds {
        self.config.bounds()
    }
    pub(crate) fn n(&self) -> usize {
        self.config.n_population()
    }
    pub(crate) fn dim(&self) -> usize {
        self.config.dim()
    }
    pub(crate) fn max_iters(&self) -> usize {
        self.config.max_iters()
    }
    pub(crate) fn best(&self) -> &BestSolution {
        &self.best
    }

    /// The configured starting population, or a uniform draw in the box.
    pub(crate) fn initial_population(&mut self) -> Array2<f64> {
        match self.config.initial_population() {
            Some(pop) => pop.clone(),
            None => init_random(self.config.bounds(), self.n(), &mut self.rng),
        }
    }

    /// Evaluate each row; a non-finite value aborts the run.
    pub(crate) fn evaluate(&self, pop: &Array2<f64>) -> Result<Array1<f64>> {
        let fitness: Array1<f64> = pop
            .rows()
            .into_iter()
            .map(|x| self.objective.evaluate(x))
            .collect();
        if let Some(i) = fitness.iter().position(|v| !v.is_finite()) {
            return Err(self.degenerate(format!(
                "objective returned {} for member {}",
                fitness[i], i
            )));
        }
        Ok(fitness)
    }

    /// Clip `pop` into the box, then evaluate it.
    pub(crate) fn repair_and_evaluate(&self, pop: &mut Array2<f64>) -> Result<Array1<f64>> {
        self.bounds().clip(pop);
        self.evaluate(pop)
    }

    /// Take the best member of `pop` as incumbent if it strictly improves on it.
    ///
    /// Returns the index of the best member of `pop` (first one on ties).
    pub(crate) fn observe(&mut self, pop: &Array2<f64>, fitness: &Array1<f64>) -> usize {
        let (i, f) = argmin(fitness);
        if f < self.best.score {
            self.best = BestSolution {
                position: pop.row(i).to_owned(),
                score: f,
            };
        }
        i
    }

    /// Append the incumbent to the trace and move to the next iteration.
    pub(crate) fn end_iteration(&mut self) {
        self.recorder.record_iteration(&self.best);
        if self.config.verbose() {
            log::info!(
                "{} it {:<5}: best {:.6e} ({:.3} s)",
                self.name,
                self.iteration,
                self.best.score,
                self.recorder.elapsed_secs()
            );
        }
        self.iteration += 1;
    }

    /// Record a soft correction.
    pub(crate) fn warn(&mut self, message: String) {
        self.recorder.warn(message);
    }

    /// Error describing a numerical degeneracy at the current iteration.
    pub(crate) fn degenerate(&self, detail: String) -> OptimizerError {
        OptimizerError::NumericalDegeneracy {
            optimizer: self.name,
            iteration: self.iteration,
            detail,
        }
    }

    /// Uniform draw in `[0, 1)`.
    pub(crate) fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Matrix of uniform draws in `[0, 1)`, filled row by row.
    pub(crate) fn uniform_matrix(&mut self, rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_simple_fn((rows, cols), || self.rng.random::<f64>())
    }

    /// Matrix of standard normal draws, filled row by row.
    pub(crate) fn normal_matrix(&mut self, rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_simple_fn((rows, cols), || self.rng.sample::<f64, _>(StandardNormal))
    }

    /// Matrix of uniform draws inside the box, one row per member.
    pub(crate) fn sample_in_bounds(&mut self, rows: usize) -> Array2<f64> {
        init_random(self.config.bounds(), rows, &mut self.rng)
    }

    /// Repair and evaluate the final population, then seal the record.
    pub(crate) fn finish(mut self, mut pop: Array2<f64>) -> Result<RunRecord> {
        let fitness = self.repair_and_evaluate(&mut pop)?;
        self.observe(&pop, &fitness);
        log::debug!(
            "{} finished \"{}\": best {:.6e} after {} iterations",
            self.name,
            self.objective.name(),
            self.best.score,
            self.recorder.num_iterations()
        );
        Ok(self.recorder.seal(self.best, pop, fitness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfigBuilder;
    use ndarray::array;
    use walkers_landscape::landscape_by_name;

    #[test]
    fn test_observe_is_strict_and_keeps_first() {
        let f = landscape_by_name("Sphere", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f).population(3).build().unwrap();
        let mut run = Run::start("TEST", &f, &cfg, vec![]).unwrap();

        let pop = array![[1.0, 0.0], [0.0, 1.0], [2.0, 0.0]];
        let fit = run.evaluate(&pop).unwrap();
        assert_eq!(run.observe(&pop, &fit), 0);
        assert_eq!(run.best().position, array![1.0, 0.0]);

        // equal score elsewhere does not replace the incumbent
        let pop2 = array![[0.0, -1.0], [3.0, 3.0], [2.0, 2.0]];
        let fit2 = run.evaluate(&pop2).unwrap();
        run.observe(&pop2, &fit2);
        assert_eq!(run.best().position, array![1.0, 0.0]);
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let f = landscape_by_name("Sphere", 3).unwrap();
        let cfg = RunConfigBuilder::new().dim(2).build().unwrap();
        let err = Run::start("TEST", &f, &cfg, vec![]).err().unwrap();
        assert!(err.is_configuration_error());
    }
}
