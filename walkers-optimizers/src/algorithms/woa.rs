//! Whale optimization algorithm.
//!
//! Each whale draws `A = 2a·r1 − a`, `C = 2·r2` and a coin `p`:
//! with `p < 0.5` it encircles the leader (`|A| < 1`) or searches around a
//! random other whale (`|A| ≥ 1`); otherwise it follows a logarithmic spiral
//! `|L − x|·e^{b·l}·cos(2πl) + L` with `l` drawn from `[a2, 1]`.

use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::distinct_indices::other_index;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, require_finite, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "WOA";

/// WOA hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoaParams {
    /// Shape constant of the logarithmic spiral
    pub b: f64,
}

impl Default for WoaParams {
    fn default() -> Self {
        Self { b: 1.0 }
    }
}

impl Hyperparameters for WoaParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["b"];

    fn values(&self) -> Vec<f64> {
        vec![self.b]
    }
    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "b" => self.b = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }
    fn validate(&self) -> Result<()> {
        require_finite(NAME, "b", self.b)
    }
}

/// Minimize `objective` with the whale optimization algorithm.
pub fn woa(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &WoaParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());

    let mut pos = run.initial_population();
    let a_schedule = Array1::linspace(2.0, 0.0, run.max_iters());
    let a2_schedule = Array1::linspace(-1.0, -2.0, run.max_iters());

    for (&a, &a2) in a_schedule.iter().zip(a2_schedule.iter()) {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);
        let leader = run.best().position.clone();

        let mut next = Array2::<f64>::zeros((n, d));
        for i in 0..n {
            let big_a = 2.0 * a * run.uniform() - a;
            let c = 2.0 * run.uniform();
            let p = run.uniform();
            let x = pos.row(i);
            let mut out = next.row_mut(i);

            if p < 0.5 {
                if big_a.abs() >= 1.0 {
                    let k = other_index(n, i, &mut run.rng);
                    let target = pos.row(k);
                    for j in 0..d {
                        out[j] = target[j] - big_a * (c * target[j] - x[j]).abs();
                    }
                } else {
                    for j in 0..d {
                        out[j] = leader[j] - big_a * (c * leader[j] - x[j]).abs();
                    }
                }
            } else {
                let l = (a2 - 1.0) * run.uniform() + 1.0;
                let spiral = (params.b * l).exp() * (2.0 * PI * l).cos();
                for j in 0..d {
                    out[j] = (leader[j] - x[j]).abs() * spiral + leader[j];
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
    use walkers_landscape::landscape_by_name;

    #[test]
    fn test_woa_sphere_improves() {
        let f = landscape_by_name("Sphere", 3).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(30)
            .max_iters(100)
            .seed(11)
            .build()
            .unwrap();
        let rec = woa(&f, &cfg, &WoaParams::default()).unwrap();
        let scores = rec.trace_scores();
        assert!(scores[scores.len() - 1] <= scores[0]);
        assert!(rec.best_score() < 1e-2, "best={}", rec.best_score());
    }
}
