//! Gravitational search algorithm.
//!
//! Fitness is mapped to normalized masses; each agent is pulled by the `k`
//! heaviest agents with force `rand·M_z·(x_z − x_i)/(‖x_i − x_z‖^rpower + eps)`,
//! and `k` shrinks linearly from the whole population to 2% of it when
//! `elitist` is set. The gravitational constant decays as
//! `G = g0·exp(−alpha·t/T)`.

use ndarray::{Array1, Array2, Zip};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::argmin::argsort;
use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, require_finite, require_non_negative, to_flag, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "GSA";

/// GSA hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GsaParams {
    /// Shrink the set of attracting agents over the run
    pub elitist: bool,
    /// Power of the distance in the force denominator
    pub rpower: f64,
    /// Decay rate of the gravitational constant
    pub alpha: f64,
    /// Initial gravitational constant
    pub g0: f64,
}

impl Default for GsaParams {
    fn default() -> Self {
        Self {
            elitist: true,
            rpower: 1.0,
            alpha: 20.0,
            g0: 100.0,
        }
    }
}

impl Hyperparameters for GsaParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["elitist", "rpower", "alpha", "g0"];

    fn values(&self) -> Vec<f64> {
        vec![
            if self.elitist { 1.0 } else { 0.0 },
            self.rpower,
            self.alpha,
            self.g0,
        ]
    }

    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "elitist" => self.elitist = to_flag(NAME, "elitist", value)?,
            "rpower" => self.rpower = value,
            "alpha" => self.alpha = value,
            "g0" => self.g0 = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require_non_negative(NAME, "rpower", self.rpower)?;
        require_finite(NAME, "alpha", self.alpha)?;
        require_non_negative(NAME, "g0", self.g0)
    }
}

/// Normalized masses: the best agent is heaviest, the worst weighs nothing.
///
/// When every fitness is equal each agent gets `1/n`.
pub(crate) fn masses(fitness: &Array1<f64>) -> Array1<f64> {
    let n = fitness.len();
    let fmin = fitness.iter().cloned().fold(f64::INFINITY, f64::min);
    let fmax = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if fmax == fmin {
        return Array1::from_elem(n, 1.0 / n as f64);
    }
    let m = fitness.mapv(|f| (f - fmax) / (fmin - fmax));
    let total = m.sum();
    m / total
}

/// Number of attracting agents at iteration `t` of `max_iters`.
pub(crate) fn kbest(t: usize, max_iters: usize, n: usize, elitist: bool) -> usize {
    if !elitist || max_iters == 1 {
        return n;
    }
    let progress = t as f64 / (max_iters - 1) as f64;
    let percent = 2.0 + (1.0 - progress) * 98.0;
    ((n as f64 * percent / 100.0).round() as usize).clamp(1, n)
}

/// Minimize `objective` with the gravitational search algorithm.
pub fn gsa(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &GsaParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());
    let max_iters = run.max_iters();

    let mut pos = run.initial_population();
    let mut vel = Array2::<f64>::zeros((n, d));

    for t in 0..max_iters {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);

        let g = params.g0 * (-params.alpha * t as f64 / max_iters as f64).exp();
        let m = masses(&fitness);
        let heaviest = argsort(&m.mapv(|v| -v));
        let k = kbest(t, max_iters, n, params.elitist);

        let mut force = Array2::<f64>::zeros((n, d));
        for &z in &heaviest[..k] {
            for i in 0..n {
                let r = Zip::from(pos.row(i))
                    .and(pos.row(z))
                    .fold(0.0, |acc, &a, &b| acc + (a - b) * (a - b))
                    .sqrt();
                let scale = m[z] / (r.powf(params.rpower) + f64::EPSILON);
                for j in 0..d {
                    force[(i, j)] += run.uniform() * scale * (pos[(z, j)] - pos[(i, j)]);
                }
            }
        }

        let damp = run.uniform_matrix(n, d);
        Zip::from(&mut vel)
            .and(&damp)
            .and(&force)
            .for_each(|v, &r, &f| *v = r * *v + g * f);
        pos += &vel;

        run.end_iteration();
    }

    run.finish(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfigBuilder;
    use approx::assert_relative_eq;
    use ndarray::array;
    use walkers_landscape::landscape_by_name;

    #[test]
    fn test_equal_fitness_gives_uniform_mass() {
        let m = masses(&array![3.0, 3.0, 3.0, 3.0]);
        assert!(m.iter().all(|&v| v == 0.25));
    }

    #[test]
    fn test_masses_are_normalized() {
        let m = masses(&array![1.0, 2.0, 3.0]);
        assert_relative_eq!(m.sum(), 1.0);
        assert_relative_eq!(m[0], 2.0 / 3.0);
        assert_eq!(m[2], 0.0);
    }

    #[test]
    fn test_kbest_schedule() {
        assert_eq!(kbest(0, 100, 50, true), 50);
        assert_eq!(kbest(99, 100, 50, true), 1);
        assert_eq!(kbest(99, 100, 50, false), 50);
        assert_eq!(kbest(0, 1, 7, true), 7);
    }

    #[test]
    fn test_gsa_sphere() {
        let f = landscape_by_name("Sphere", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(30)
            .max_iters(100)
            .seed(13)
            .build()
            .unwrap();
        let rec = gsa(&f, &cfg, &GsaParams::default()).unwrap();
        assert!(rec.best_score() < 0.5, "best={}", rec.best_score());
    }
}
