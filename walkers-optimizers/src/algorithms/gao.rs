//! Genetic algorithm.
//!
//! The `floor(n·elite_rate)` best members survive unchanged. Every other
//! child takes each gene from one of two distinct elite parents, then each
//! child gene is replaced by a uniform draw in the box with probability
//! `mutation_rate`.

use ndarray::{Array2, Axis, s};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::argmin::argsort;
use crate::config::RunConfig;
use crate::distinct_indices::distinct_pair;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, require_probability, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "GAO";

/// Genetic algorithm hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaoParams {
    /// Fraction of the population carried over unchanged
    pub elite_rate: f64,
    /// Per-gene mutation probability of the children
    pub mutation_rate: f64,
}

impl Default for GaoParams {
    fn default() -> Self {
        Self {
            elite_rate: 0.1,
            mutation_rate: 0.3,
        }
    }
}

impl Hyperparameters for GaoParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["elite_rate", "mutation_rate"];

    fn values(&self) -> Vec<f64> {
        vec![self.elite_rate, self.mutation_rate]
    }

    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "elite_rate" => self.elite_rate = value,
            "mutation_rate" => self.mutation_rate = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require_probability(NAME, "elite_rate", self.elite_rate)?;
        require_probability(NAME, "mutation_rate", self.mutation_rate)
    }
}

/// Minimize `objective` with a genetic algorithm.
pub fn gao(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &GaoParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());
    let (lower, span) = (run.bounds().lower().clone(), run.bounds().span());

    let mut elite = (n as f64 * params.elite_rate).floor() as usize;
    if elite == 0 {
        run.warn(format!(
            "elite_rate {} keeps no member of a population of {}; using 1 elite",
            params.elite_rate, n
        ));
        elite = 1;
    }

    let mut pos = run.initial_population();

    for _ in 0..run.max_iters() {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);
        let ranked = pos.select(Axis(0), &argsort(&fitness));

        let mut next = Array2::<f64>::zeros((n, d));
        next.slice_mut(s![..elite, ..])
            .assign(&ranked.slice(s![..elite, ..]));
        for i in elite..n {
            let (a, b) = distinct_pair(elite, &mut run.rng);
            for j in 0..d {
                let parent = if run.uniform() < 0.5 { a } else { b };
                next[(i, j)] = if run.uniform() < params.mutation_rate {
                    lower[j] + run.uniform() * span[j]
                } else {
                    ranked[(parent, j)]
                };
            }
        }
        pos = next;

        run.end_iteration();
    }

    run.finish(pos)
}
