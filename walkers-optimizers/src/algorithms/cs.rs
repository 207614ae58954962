//! Cuckoo search.
//!
//! Nests take a Lévy flight scaled by their distance to the best nest
//! (Mantegna's algorithm), keep the move only if it is not worse, and then a
//! `pa` fraction of components is abandoned and rebuilt from the difference of
//! two randomly permuted nests, again with greedy replacement.

use std::f64::consts::PI;

use ndarray::{Array1, Array2, Zip};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::gamma;
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::distinct_indices::permutation;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, invalid, require_probability, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "CS";

/// Cuckoo search hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsParams {
    /// Discovery rate of alien eggs
    pub pa: f64,
    /// Lévy exponent, strictly between 1 and 2
    pub beta: f64,
}

impl Default for CsParams {
    fn default() -> Self {
        Self { pa: 0.25, beta: 1.5 }
    }
}

impl Hyperparameters for CsParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["pa", "beta"];

    fn values(&self) -> Vec<f64> {
        vec![self.pa, self.beta]
    }
    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "pa" => self.pa = value,
            "beta" => self.beta = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }
    fn validate(&self) -> Result<()> {
        require_probability(NAME, "pa", self.pa)?;
        if !(self.beta > 1.0 && self.beta < 2.0) {
            return Err(invalid(NAME, "beta", self.beta, "must lie in (1, 2)"));
        }
        Ok(())
    }
}

/// Mantegna's scale for Lévy-stable steps of exponent `beta`.
pub fn mantegna_sigma(beta: f64) -> f64 {
    let num = gamma(1.0 + beta) * (PI * beta / 2.0).sin();
    let den = gamma((1.0 + beta) / 2.0) * beta * 2f64.powf((beta - 1.0) / 2.0);
    (num / den).powf(1.0 / beta)
}

/// Replace rows of `pos` by `cand` wherever the candidate is not worse.
fn greedy_replace(
    pos: &mut Array2<f64>,
    fitness: &mut Array1<f64>,
    cand: &Array2<f64>,
    cand_fit: &Array1<f64>,
) {
    for i in 0..fitness.len() {
        if cand_fit[i] <= fitness[i] {
            fitness[i] = cand_fit[i];
            pos.row_mut(i).assign(&cand.row(i));
        }
    }
}

/// Minimize `objective` with cuckoo search.
pub fn cs(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &CsParams) -> Result<RunRecord> {
    params.validate()?;
    let sigma = mantegna_sigma(params.beta);
    let beta_inv = 1.0 / params.beta;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());

    let mut pos = run.initial_population();
    // nests only ever take repaired candidates, so fitness carries over
    let mut fitness = run.repair_and_evaluate(&mut pos)?;
    run.observe(&pos, &fitness);

    for _ in 0..run.max_iters() {
        let best = run.best().position.clone();

        // Lévy flights
        let u = run.normal_matrix(n, d);
        let v = run.normal_matrix(n, d);
        let jitter = run.normal_matrix(n, d);
        let mut cand = pos.clone();
        for i in 0..n {
            Zip::from(cand.row_mut(i))
                .and(&best)
                .and(u.row(i))
                .and(v.row(i))
                .and(jitter.row(i))
                .for_each(|x, &b, &ui, &vi, &ji| {
                    let denom = vi.abs().powf(beta_inv);
                    // zero Lévy denominator: no step for this component
                    let step = if denom > 0.0 { ui * sigma / denom } else { 0.0 };
                    *x += 0.01 * step * (*x - b) * ji;
                });
        }
        let cand_fit = run.repair_and_evaluate(&mut cand)?;
        run.observe(&cand, &cand_fit);
        greedy_replace(&mut pos, &mut fitness, &cand, &cand_fit);

        // abandon a fraction of the nests; differences come from the nests
        // kept after the Lévy step, not from the Lévy candidates
        let keep = run.uniform_matrix(n, d);
        let scale = run.uniform_matrix(n, d);
        let p1 = permutation(n, &mut run.rng);
        let p2 = permutation(n, &mut run.rng);
        let mut cand = pos.clone();
        for i in 0..n {
            for j in 0..d {
                if keep[(i, j)] > params.pa {
                    cand[(i, j)] += scale[(i, j)] * (pos[(p1[i], j)] - pos[(p2[i], j)]);
                }
            }
        }
        let cand_fit = run.repair_and_evaluate(&mut cand)?;
        run.observe(&cand, &cand_fit);
        greedy_replace(&mut pos, &mut fitness, &cand, &cand_fit);

        run.end_iteration();
    }

    run.finish(pos)
}
