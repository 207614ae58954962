//! Grey wolf optimizer.
//!
//! The three best wolves seen so far (alpha, beta, delta) pull every member;
//! the new position is the mean of the three pulls `L − A·|C·L − x|` with
//! `A = 2a·r1 − a`, `C = 2·r2` and `a` annealed linearly from 2 to 0.

use ndarray::{Array1, Array2, ArrayView1, Zip};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, unknown_name};
use crate::record::{BestSolution, RunRecord};

const NAME: &str = "GWO";

/// GWO has no tunable hyperparameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GwoParams {}

impl Hyperparameters for GwoParams {
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

/// Alpha, beta and delta wolves, persisted across iterations.
#[derive(Debug, Default)]
struct Pack {
    alpha: Option<BestSolution>,
    beta: Option<BestSolution>,
    delta: Option<BestSolution>,
}

fn beats(score: f64, slot: &Option<BestSolution>) -> bool {
    slot.as_ref().is_none_or(|s| score < s.score)
}

impl Pack {
    /// Offer every member in evaluation order; strict comparisons mean an
    /// earlier member keeps the higher rank on ties.
    fn rank(&mut self, pop: &Array2<f64>, fitness: &Array1<f64>) {
        for (i, &f) in fitness.iter().enumerate() {
            let wolf = || BestSolution {
                position: pop.row(i).to_owned(),
                score: f,
            };
            if beats(f, &self.alpha) {
                self.delta = self.beta.take();
                self.beta = self.alpha.take();
                self.alpha = Some(wolf());
            } else if beats(f, &self.beta) {
                self.delta = self.beta.take();
                self.beta = Some(wolf());
            } else if beats(f, &self.delta) {
                self.delta = Some(wolf());
            }
        }
    }

    /// Leader positions; missing ranks fall back to the next better one.
    fn leaders(&self) -> Option<[ArrayView1<'_, f64>; 3]> {
        let alpha = self.alpha.as_ref()?;
        let beta = self.beta.as_ref().unwrap_or(alpha);
        let delta = self.delta.as_ref().unwrap_or(beta);
        Some([alpha.position.view(), beta.position.view(), delta.position.view()])
    }
}

/// Minimize `objective` with the grey wolf optimizer.
pub fn gwo(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &GwoParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());

    let mut pos = run.initial_population();
    let mut pack = Pack::default();
    let schedule = Array1::linspace(2.0, 0.0, run.max_iters());

    for &a in schedule.iter() {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);
        pack.rank(&pos, &fitness);
        let leaders = pack
            .leaders()
            .ok_or_else(|| run.degenerate("no leader after ranking".to_string()))?;

        let mut next = Array2::<f64>::zeros((n, d));
        for leader in leaders {
            let r1 = run.uniform_matrix(n, d);
            let r2 = run.uniform_matrix(n, d);
            for i in 0..n {
                Zip::from(next.row_mut(i))
                    .and(pos.row(i))
                    .and(&leader)
                    .and(r1.row(i))
                    .and(r2.row(i))
                    .for_each(|acc, &x, &l, &u1, &u2| {
                        let big_a = 2.0 * a * u1 - a;
                        let c = 2.0 * u2;
                        *acc += l - big_a * (c * l - x).abs();
                    });
            }
        }
        next /= 3.0;
        pos = next;

        run.end_iteration();
    }

    run.finish(pos)
}
