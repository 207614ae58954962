//! Biogeography-based optimization.
//!
//! Habitats are ranked best first. Habitat `i` has emigration rate
//! `mu_i = (n − i)/(n + 1)` and immigration rate `lambda_i = 1 − mu_i`; each
//! component immigrates with probability `lambda_i` from a source picked by
//! roulette wheel on `mu`. Components mutate by uniform replacement, and the
//! `elite` best habitats of the previous generation overwrite the worst of
//! the new one.

use ndarray::{Array1, Axis};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::argmin::argsort;
use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, invalid, require_probability, to_count, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "BBO";

/// BBO hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BboParams {
    /// Per-component mutation probability
    pub pmutate: f64,
    /// Habitats kept across generations; `0 < elite < n_population`
    pub elite: usize,
}

impl Default for BboParams {
    fn default() -> Self {
        Self {
            pmutate: 0.01,
            elite: 2,
        }
    }
}

impl Hyperparameters for BboParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["pmutate", "elite"];

    fn values(&self) -> Vec<f64> {
        vec![self.pmutate, self.elite as f64]
    }

    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "pmutate" => self.pmutate = value,
            "elite" => self.elite = to_count(NAME, "elite", value)?,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require_probability(NAME, "pmutate", self.pmutate)?;
        if self.elite == 0 {
            return Err(invalid(NAME, "elite", 0.0, "must be at least 1"));
        }
        Ok(())
    }
}

/// Emigration rates, best habitat first.
fn emigration_rates(n: usize) -> Array1<f64> {
    Array1::linspace(n as f64, 1.0, n) / (n as f64 + 1.0)
}

/// Index of the first cumulative weight exceeding `r`.
fn roulette(cumulative: &Array1<f64>, r: f64) -> usize {
    let n = cumulative.len();
    cumulative
        .as_slice()
        .map_or(n - 1, |c| c.partition_point(|&w| w <= r))
        .min(n - 1)
}

/// Minimize `objective` with biogeography-based optimization.
pub fn bbo(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &BboParams) -> Result<RunRecord> {
    params.validate()?;
    if params.elite >= config.n_population() {
        return Err(invalid(
            NAME,
            "elite",
            params.elite as f64,
            &format!("must be below the population size ({})", config.n_population()),
        ));
    }
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());
    let elite = params.elite;
    let (lower, span) = (run.bounds().lower().clone(), run.bounds().span());

    let mu = emigration_rates(n);
    let lambda = mu.mapv(|m| 1.0 - m);
    let mut cumulative = mu.clone();
    cumulative.accumulate_axis_inplace(Axis(0), |&prev, cur| *cur += prev);
    let total = mu.sum();

    let mut pos = run.initial_population();

    for _ in 0..run.max_iters() {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);

        let order = argsort(&fitness);
        let ranked = pos.select(Axis(0), &order);

        let mut next = ranked.clone();
        for i in 0..n {
            for j in 0..d {
                if run.uniform() < lambda[i] {
                    let source = roulette(&cumulative, run.uniform() * total);
                    next[(i, j)] = ranked[(source, j)];
                }
                if run.uniform() < params.pmutate {
                    next[(i, j)] = lower[j] + run.uniform() * span[j];
                }
            }
        }

        // the elites of this generation replace the worst of the next one
        let next_fit = run.repair_and_evaluate(&mut next)?;
        run.observe(&next, &next_fit);
        let next_order = argsort(&next_fit);
        for (k, &worst) in next_order[n - elite..].iter().enumerate() {
            next.row_mut(worst).assign(&ranked.row(k));
        }
        pos = next;

        run.end_iteration();
    }

    run.finish(pos)
}
