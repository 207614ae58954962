//! Bat algorithm.
//!
//! Each bat draws a frequency `Q` in `[qmin, qmax]` and accelerates by
//! `Q·(x − best)`. Bats failing the pulse gate (`rand > pulse_rate`) fly
//! instead to a Gaussian jitter around the best, scaled by `step·loudness`.
//! A candidate replaces its bat only if it passes a fresh pulse gate
//! (`rand > pulse_rate`), the loudness gate (`rand < loudness`) and is not
//! worse. With `pulse_rate = 1` no bat ever moves.

use ndarray::{Array1, Array2, Zip};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{
    Hyperparameters, require_finite, require_non_negative, require_probability, unknown_name,
};
use crate::record::RunRecord;

const NAME: &str = "BAT";

/// Bat algorithm hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatParams {
    /// Loudness, the acceptance probability
    pub loudness: f64,
    /// Pulse rate; bats above it are re-centred on the best
    pub pulse_rate: f64,
    /// Lowest frequency
    pub qmin: f64,
    /// Highest frequency
    pub qmax: f64,
    /// Scale of the Gaussian jitter around the best
    pub step: f64,
}

impl Default for BatParams {
    fn default() -> Self {
        Self {
            loudness: 0.5,
            pulse_rate: 0.5,
            qmin: 0.0,
            qmax: 2.0,
            step: 1e-3,
        }
    }
}

impl Hyperparameters for BatParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &["loudness", "pulse_rate", "qmin", "qmax", "step"];

    fn values(&self) -> Vec<f64> {
        vec![self.loudness, self.pulse_rate, self.qmin, self.qmax, self.step]
    }

    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "loudness" => self.loudness = value,
            "pulse_rate" => self.pulse_rate = value,
            "qmin" => self.qmin = value,
            "qmax" => self.qmax = value,
            "step" => self.step = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require_probability(NAME, "loudness", self.loudness)?;
        require_probability(NAME, "pulse_rate", self.pulse_rate)?;
        require_finite(NAME, "qmin", self.qmin)?;
        require_finite(NAME, "qmax", self.qmax)?;
        require_non_negative(NAME, "step", self.step)
    }
}

/// Minimize `objective` with the bat algorithm.
pub fn bat(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &BatParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());

    let (qmin, qmax) = if params.qmin > params.qmax {
        run.warn(format!(
            "qmin ({}) > qmax ({}); swapping the frequency range",
            params.qmin, params.qmax
        ));
        (params.qmax, params.qmin)
    } else {
        (params.qmin, params.qmax)
    };
    let jitter_scale = params.step * params.loudness;

    let mut pos = run.initial_population();
    let mut vel = Array2::<f64>::zeros((n, d));

    for _ in 0..run.max_iters() {
        let mut fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);
        let best = run.best().position.clone();

        let mut cand = Array2::<f64>::zeros((n, d));
        let mut pulse_gate = Array1::from_elem(n, false);
        let mut loud_gate = Array1::from_elem(n, false);
        for i in 0..n {
            let q = qmin + (qmax - qmin) * run.uniform();
            Zip::from(vel.row_mut(i))
                .and(pos.row(i))
                .and(&best)
                .for_each(|v, &x, &b| *v += q * (x - b));

            if run.uniform() > params.pulse_rate {
                let jitter = run.normal_matrix(1, d);
                Zip::from(cand.row_mut(i))
                    .and(&best)
                    .and(jitter.row(0))
                    .for_each(|c, &b, &z| *c = b + jitter_scale * z);
            } else {
                Zip::from(cand.row_mut(i))
                    .and(pos.row(i))
                    .and(vel.row(i))
                    .for_each(|c, &x, &v| *c = x + v);
            }
            pulse_gate[i] = run.uniform() > params.pulse_rate;
            loud_gate[i] = run.uniform() < params.loudness;
        }

        let cand_fit = run.repair_and_evaluate(&mut cand)?;
        run.observe(&cand, &cand_fit);
        for i in 0..n {
            if pulse_gate[i] && loud_gate[i] && cand_fit[i] <= fitness[i] {
                fitness[i] = cand_fit[i];
                pos.row_mut(i).assign(&cand.row(i));
            }
        }

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
    fn test_swapped_frequency_range_is_recorded() {
        let f = landscape_by_name("Sphere", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(10)
            .max_iters(5)
            .build()
            .unwrap();
        let params = BatParams {
            qmin: 2.0,
            qmax: 0.0,
            ..BatParams::default()
        };
        let rec = bat(&f, &cfg, &params).unwrap();
        assert_eq!(rec.warnings().len(), 1);
        assert!(rec.warnings()[0].contains("swapping"));

        let rec = bat(&f, &cfg, &BatParams::default()).unwrap();
        assert!(rec.warnings().is_empty());
    }

    #[test]
    fn test_bat_trace_on_sphere() {
        let f = landscape_by_name("Sphere", 2).unwrap();
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(30)
            .max_iters(100)
            .seed(11)
            .build()
            .unwrap();
        let rec = bat(&f, &cfg, &BatParams::default()).unwrap();
        let scores = rec.trace_scores();
        assert!(scores[scores.len() - 1] <= scores[0]);
        assert!(rec.best_score() <= scores[scores.len() - 1]);
    }

    #[test]
    fn test_full_pulse_rate_keeps_every_bat_in_place() {
        let f = landscape_by_name("Rastrigin", 2).unwrap();
        let start = Array2::from_shape_fn((20, 2), |(i, j)| -4.0 + 0.4 * i as f64 + 0.3 * j as f64);
        let cfg = RunConfigBuilder::for_objective(&f)
            .population(20)
            .max_iters(30)
            .seed(5)
            .initial_population(start.clone())
            .build()
            .unwrap();
        let params = BatParams {
            loudness: 1.0,
            pulse_rate: 1.0,
            ..BatParams::default()
        };
        let rec = bat(&f, &cfg, &params).unwrap();
        assert_eq!(rec.population(), &start);
    }

    #[test]
    fn test_loudness_out_of_range() {
        let p = BatParams {
            loudness: 1.5,
            ..BatParams::default()
        };
        assert!(p.validate().unwrap_err().is_configuration_error());
    }
}
