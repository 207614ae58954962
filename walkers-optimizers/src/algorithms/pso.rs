//! Particle swarm optimization.
//!
//! Velocity update with linearly annealed inertia:
//! `v = w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)`, clipped to `±vmax`,
//! then `x += v`.

use ndarray::{Array1, Array2, Zip};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, invalid, require_finite, require_non_negative, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "PSO";

/// PSO hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsoParams {
    /// Velocity clamp, per component
    pub vmax: f64,
    /// Inertia weight at the first iteration
    pub wmax: f64,
    /// Inertia weight at the last iteration
    pub wmin: f64,
    /// Cognitive (personal best) acceleration
    pub c1: f64,
    /// Social (global best) acceleration
    pub c2: f64,
}

impl Default for PsoParams {
    fn default() -> Self {
        Self {
            vmax: 6.0,
            wmax: 0.9,
            wmin: 0.2,
            c1: 2.0,
            c2: 2.0,
        }
    }
}

impl Hyperparameters for PsoParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["vmax", "wmax", "wmin", "c1", "c2"];

    fn values(&self) -> Vec<f64> {
        vec![self.vmax, self.wmax, self.wmin, self.c1, self.c2]
    }

    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "vmax" => self.vmax = value,
            "wmax" => self.wmax = value,
            "wmin" => self.wmin = value,
            "c1" => self.c1 = value,
            "c2" => self.c2 = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require_finite(NAME, "vmax", self.vmax)?;
        if self.vmax <= 0.0 {
            return Err(invalid(NAME, "vmax", self.vmax, "must be > 0"));
        }
        require_finite(NAME, "wmax", self.wmax)?;
        require_finite(NAME, "wmin", self.wmin)?;
        require_non_negative(NAME, "c1", self.c1)?;
        require_non_negative(NAME, "c2", self.c2)
    }
}

/// Minimize `objective` with particle swarm optimization.
pub fn pso(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &PsoParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());

    let mut pos = run.initial_population();
    let mut vel = Array2::<f64>::zeros((n, d));
    let mut pbest = Array2::<f64>::zeros((n, d));
    let mut pscore = Array1::from_elem(n, f64::INFINITY);
    let weights = Array1::linspace(params.wmax, params.wmin, run.max_iters());

    for &w in weights.iter() {
        let fitness = run.repair_and_evaluate(&mut pos)?;
        for i in 0..n {
            if fitness[i] < pscore[i] {
                pscore[i] = fitness[i];
                pbest.row_mut(i).assign(&pos.row(i));
            }
        }
        run.observe(&pos, &fitness);
        let gbest = run.best().position.clone();

        let r1 = run.uniform_matrix(n, d);
        let r2 = run.uniform_matrix(n, d);
        for i in 0..n {
            Zip::from(vel.row_mut(i))
                .and(pos.row(i))
                .and(pbest.row(i))
                .and(&gbest)
                .and(r1.row(i))
                .and(r2.row(i))
                .for_each(|v, &x, &pb, &gb, &a, &b| {
                    let next = w * *v + params.c1 * a * (pb - x) + params.c2 * b * (gb - x);
                    *v = next.clamp(-params.vmax, params.vmax);
                });
        }
        pos += &vel;

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
    fn test_pso_ackley_2d() {
        let f = landscape_by_name("Ackley", 2).unwrap();
        let cfg = RunConfigBuilder::new()
            .bounds(-32.768, 32.768)
            .dim(2)
            .population(50)
            .max_iters(200)
            .seed(42)
            .build()
            .unwrap();
        let rec = pso(&f, &cfg, &PsoParams::default()).unwrap();
        assert_eq!(rec.trace().len(), 200);
        assert!(rec.best_score() < 1.0, "best={}", rec.best_score());
    }

    #[test]
    fn test_pso_rejects_non_positive_vmax() {
        let p = PsoParams {
            vmax: 0.0,
            ..PsoParams::default()
        };
        assert!(p.validate().unwrap_err().is_configuration_error());
    }
}
