//! Firefly algorithm.
//!
//! Every firefly moves toward each strictly brighter one with attractiveness
//! `beta(r) = (beta0 − betamin)·exp(−gamma·r²) + betamin`, plus a uniform
//! jitter of width `alpha·span` whose scale `alpha` shrinks geometrically to
//! about `1e-4/0.9` of its start over the run. Quadratic in the population
//! size per iteration.

use ndarray::Zip;
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, require_finite, require_non_negative, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "FFA";

/// Firefly hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FfaParams {
    /// Initial jitter scale, relative to the box span
    pub alpha: f64,
    /// Attractiveness at infinite distance
    pub betamin: f64,
    /// Attractiveness at distance zero
    pub beta0: f64,
    /// Light absorption coefficient
    pub gamma: f64,
}

impl Default for FfaParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            betamin: 0.2,
            beta0: 1.0,
            gamma: 1.0,
        }
    }
}

impl Hyperparameters for FfaParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["alpha", "betamin", "beta0", "gamma"];

    fn values(&self) -> Vec<f64> {
        vec![self.alpha, self.betamin, self.beta0, self.gamma]
    }

    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "alpha" => self.alpha = value,
            "betamin" => self.betamin = value,
            "beta0" => self.beta0 = value,
            "gamma" => self.gamma = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require_non_negative(NAME, "alpha", self.alpha)?;
        require_finite(NAME, "betamin", self.betamin)?;
        require_finite(NAME, "beta0", self.beta0)?;
        require_non_negative(NAME, "gamma", self.gamma)
    }
}

/// Per-iteration decay factor of the jitter scale.
fn alpha_decay(max_iters: usize) -> f64 {
    (1e-4f64 / 0.9).powf(1.0 / max_iters as f64)
}

/// Minimize `objective` with the firefly algorithm.
pub fn ffa(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &FfaParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());
    let span = run.bounds().span();
    let decay = alpha_decay(run.max_iters());

    let mut pos = run.initial_population();
    let mut alpha = params.alpha;

    for _ in 0..run.max_iters() {
        alpha *= decay;
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);

        // attractiveness uses the distances at the start of the sweep,
        // moves compound within it
        let mut next = pos.clone();
        for i in 0..n {
            for j in 0..n {
                if fitness[j] >= fitness[i] {
                    continue;
                }
                let r2: f64 = Zip::from(pos.row(i))
                    .and(pos.row(j))
                    .fold(0.0, |acc, &a, &b| acc + (a - b) * (a - b));
                let beta = (params.beta0 - params.betamin) * (-params.gamma * r2).exp() + params.betamin;
                for k in 0..d {
                    let jitter = (run.uniform() - 0.5) * alpha * span[k];
                    next[(i, k)] = next[(i, k)] * (1.0 - beta) + next[(j, k)] * beta + jitter;
                }
            }
        }
        pos = next;

        run.end_iteration();
    }

    run.finish(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfigBuilder;
    use approx::assert_relative_eq;
    use walkers_landscape::landscape_by_name;

    #[test]
    fn test_alpha_decay_reaches_target() {
        let t = 250;
        assert_relative_eq!(alpha_decay(t).powi(t as i32), 1e-4 / 0.9, max_relative = 1e-9);
    }

    #[test]
    fn test_ffa_sphere() {
        let f = landscape_by_name("Sphere", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(25)
            .max_iters(100)
            .seed(5)
            .build()
            .unwrap();
        let rec = ffa(&f, &cfg, &FfaParams::default()).unwrap();
        assert!(rec.best_score() < 0.5, "best={}", rec.best_score());
    }
}
