//! Salp swarm algorithm.
//!
//! The first `floor(n/2)` salps lead: each component jumps to
//! `best ± c1·U(lower, upper)` with `c1 = 2·exp(−(4t/T)²)`. The rest form a
//! chain, each follower moving to the midpoint between itself and the salp
//! ahead of it.

use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "SSA";

/// SSA has no tunable hyperparameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SsaParams {}

impl Hyperparameters for SsaParams {
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

/// Number of leading salps.
pub(crate) fn leader_count(n: usize) -> usize {
    n / 2
}

/// Move every follower (rows `leaders..`) to the midpoint with the row ahead.
///
/// Chained: each follower averages with its predecessor's new position, so a
/// leader's jump propagates down the whole chain in one iteration.
fn follow_chain(next: &mut Array2<f64>, leaders: usize) {
    for i in leaders.max(1)..next.nrows() {
        let ahead = next.row(i - 1).to_owned();
        Zip::from(next.row_mut(i))
            .and(&ahead)
            .for_each(|x, &a| *x = 0.5 * (*x + a));
    }
}

/// Minimize `objective` with the salp swarm algorithm.
pub fn ssa(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &SsaParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());
    let max_iters = run.max_iters() as f64;
    let (lower, span) = (run.bounds().lower().clone(), run.bounds().span());
    let leaders = leader_count(n);

    let mut pos = run.initial_population();

    for t in 0..run.max_iters() {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);
        let best = run.best().position.clone();
        let c1 = 2.0 * (-(4.0 * (t + 1) as f64 / max_iters).powi(2)).exp();

        let mut next = pos.clone();
        for i in 0..leaders {
            for j in 0..d {
                let c2 = lower[j] + run.uniform() * span[j];
                next[(i, j)] = if run.uniform() < 0.5 {
                    best[j] + c1 * c2
                } else {
                    best[j] - c1 * c2
                };
            }
        }
        follow_chain(&mut next, leaders);
        pos = next;

        run.end_iteration();
    }

    run.finish(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfigBuilder;
    use ndarray::array;
    use walkers_landscape::landscape_by_name;

    #[test]
    fn test_followers_average_with_moved_predecessor() {
        let mut next = array![[4.0], [0.0], [0.0]];
        follow_chain(&mut next, 1);
        // second follower sees the first one's new position (2), not its old one (0)
        assert_eq!(next, array![[4.0], [2.0], [1.0]]);
    }

    #[test]
    fn test_leader_count_rounds_down() {
        assert_eq!(leader_count(2), 1);
        assert_eq!(leader_count(7), 3);
        assert_eq!(leader_count(50), 25);
    }

    #[test]
    fn test_ssa_booth() {
        let f = landscape_by_name("Booth", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(30)
            .max_iters(200)
            .seed(17)
            .build()
            .unwrap();
        let rec = ssa(&f, &cfg, &SsaParams::default()).unwrap();
        assert!(rec.best_score() < 1e-1, "best={}", rec.best_score());
    }
}
