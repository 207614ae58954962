//! Cuttlefish algorithm.
//!
//! The population is cut in four groups of `n/4` members (the last group
//! takes the remainder). With scalars `R ∈ U(−1, 2)`, `V ∈ U(−1.5, 1.5)` and
//! `W ∈ U(−1, 1)` redrawn every iteration:
//!
//! | group | move |
//! |---|---|
//! | 1 | reflection, `R·x + (best − x)` |
//! | 2 | visibility, `V·(best − x) + best` |
//! | 3 | `W·(best − mean(best)) + best` |
//! | 4 | uniform re-initialisation in the box |

use ndarray::{Zip, s};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "CFA";

/// CFA has no tunable hyperparameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CfaParams {}

impl Hyperparameters for CfaParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &[];

    fn values(&self) -> Vec<f64> {
        Vec::new()
    }
    fn set(&mut self, name: &str, _value: f64) -> Result<()> {
        Err(unknown_name(NAME, Self::NAMES, name))
    }
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Minimize `objective` with the cuttlefish algorithm.
pub fn cfa(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &CfaParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let n = run.n();
    let m = n / 4;

    let mut pos = run.initial_population();

    for _ in 0..run.max_iters() {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);
        let best = run.best().position.clone();
        let best_mean = best.mean().unwrap_or(0.0);

        let r = -1.0 + 3.0 * run.uniform();
        let v = -1.5 + 3.0 * run.uniform();
        let w = -1.0 + 2.0 * run.uniform();

        let mut next = pos.clone();
        for mut row in next.slice_mut(s![..m, ..]).rows_mut() {
            Zip::from(&mut row)
                .and(&best)
                .for_each(|x, &b| *x = r * *x + (b - *x));
        }
        for mut row in next.slice_mut(s![m..2 * m, ..]).rows_mut() {
            Zip::from(&mut row)
                .and(&best)
                .for_each(|x, &b| *x = v * (b - *x) + b);
        }
        for mut row in next.slice_mut(s![2 * m..3 * m, ..]).rows_mut() {
            Zip::from(&mut row)
                .and(&best)
                .for_each(|x, &b| *x = w * (b - best_mean) + b);
        }
        let fresh = run.sample_in_bounds(n - 3 * m);
        next.slice_mut(s![3 * m.., ..]).assign(&fresh);
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
    fn test_cfa_sphere() {
        let f = landscape_by_name("Sphere", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(40)
            .max_iters(100)
            .seed(23)
            .build()
            .unwrap();
        let rec = cfa(&f, &cfg, &CfaParams::default()).unwrap();
        assert!(rec.best_score() < 1e-1, "best={}", rec.best_score());
    }

    #[test]
    fn test_tiny_population_is_all_random() {
        // n/4 == 0: every member is re-drawn, the run still completes
        let f = landscape_by_name("Sphere", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(3)
            .max_iters(10)
            .build()
            .unwrap();
        let rec = cfa(&f, &cfg, &CfaParams::default()).unwrap();
        assert_eq!(rec.trace().len(), 10);
        assert!(cfg.bounds().contains_all(rec.population()));
    }
}
