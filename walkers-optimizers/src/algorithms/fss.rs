//! Fish school search.
//!
//! Per iteration:
//! - individual move: each fish tries `x + step·U(−1, 1)·span` and keeps it on
//!   strict improvement;
//! - feeding: weights grow by the normalized fitness gain, clipped to
//!   `[min_w, w_scale]`;
//! - collective-instinctive move: the school drifts by the gain-weighted mean
//!   displacement;
//! - collective-volitive move: contraction toward the weighted barycenter if
//!   the school gained weight, dilation away from it otherwise.
//!
//! `step` anneals linearly toward `fstep`, `step_volitive` toward
//! `fstep_volitive`.

use ndarray::{Array1, Array2, Zip};
use serde::{Deserialize, Serialize};
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfig;
use crate::engine::Run;
use crate::error::Result;
use crate::hyperparams::{Hyperparameters, invalid, require_finite, require_non_negative, unknown_name};
use crate::record::RunRecord;

const NAME: &str = "FSS";

/// Fish school search hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FssParams {
    /// Initial individual step, relative to the box span
    pub step: f64,
    /// Final individual step
    pub fstep: f64,
    /// Initial volitive step
    pub step_volitive: f64,
    /// Final volitive step
    pub fstep_volitive: f64,
    /// Lowest fish weight
    pub min_w: f64,
    /// Highest fish weight; fish start at half of it
    pub w_scale: f64,
}

impl Default for FssParams {
    fn default() -> Self {
        Self {
            step: 0.1,
            fstep: 1e-4,
            step_volitive: 0.01,
            fstep_volitive: 1e-3,
            min_w: 1.0,
            w_scale: 2.0,
        }
    }
}

impl Hyperparameters for FssParams {
    const OPTIMIZER: &'static str = NAME;
    const NAMES: &'static [&'static str] = &[
        "step",
        "fstep",
        "step_volitive",
        "fstep_volitive",
        "min_w",
        "w_scale",
    ];

    fn values(&self) -> Vec<f64> {
        vec![
            self.step,
            self.fstep,
            self.step_volitive,
            self.fstep_volitive,
            self.min_w,
            self.w_scale,
        ]
    }

    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "step" => self.step = value,
            "fstep" => self.fstep = value,
            "step_volitive" => self.step_volitive = value,
            "fstep_volitive" => self.fstep_volitive = value,
            "min_w" => self.min_w = value,
            "w_scale" => self.w_scale = value,
            _ => return Err(unknown_name(NAME, Self::NAMES, name)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require_non_negative(NAME, "step", self.step)?;
        require_non_negative(NAME, "fstep", self.fstep)?;
        require_non_negative(NAME, "step_volitive", self.step_volitive)?;
        require_non_negative(NAME, "fstep_volitive", self.fstep_volitive)?;
        require_finite(NAME, "min_w", self.min_w)?;
        require_finite(NAME, "w_scale", self.w_scale)?;
        if self.w_scale <= 0.0 {
            return Err(invalid(NAME, "w_scale", self.w_scale, "must be > 0"));
        }
        // fish start at w_scale / 2, which must already respect the floor
        if self.min_w > 0.5 * self.w_scale {
            return Err(invalid(NAME, "min_w", self.min_w, "must not exceed w_scale / 2"));
        }
        Ok(())
    }
}

/// Linear schedule from `start` toward `end`, `max_iters` values.
fn annealed(start: f64, end: f64, max_iters: usize) -> Array1<f64> {
    let slope = (start - end) / max_iters as f64;
    Array1::from_shape_fn(max_iters, |t| start - t as f64 * slope)
}

/// Add `Δf_i/max(Δf)` to each weight, then clip. No-op when nothing improved.
fn feed(weights: &mut Array1<f64>, gains: &Array1<f64>, min_w: f64, w_scale: f64) {
    let max_gain = gains.iter().cloned().fold(0.0, f64::max);
    if max_gain <= 0.0 {
        return;
    }
    Zip::from(weights)
        .and(gains)
        .for_each(|w, &g| *w = (*w + g / max_gain).clamp(min_w, w_scale));
}

/// Gain-weighted mean displacement, `None` if nothing improved.
fn instinctive_drift(moves: &Array2<f64>, gains: &Array1<f64>) -> Option<Array1<f64>> {
    let density = gains.sum();
    if density <= 0.0 {
        return None;
    }
    Some(moves.t().dot(gains) / density)
}

/// Minimize `objective` with fish school search.
pub fn fss(objective: &dyn ObjectiveFunction, config: &RunConfig, params: &FssParams) -> Result<RunRecord> {
    params.validate()?;
    let mut run = Run::start(NAME, objective, config, params.named())?;
    let (n, d) = (run.n(), run.dim());
    let span = run.bounds().span();
    let steps = annealed(params.step, params.fstep, run.max_iters());
    let volitives = annealed(params.step_volitive, params.fstep_volitive, run.max_iters());

    let mut pos = run.initial_population();
    let mut weights = Array1::from_elem(n, 0.5 * params.w_scale);
    let mut school_weight = weights.sum();

    for (&step, &volitive) in steps.iter().zip(volitives.iter()) {
        let mut fitness = run.repair_and_evaluate(&mut pos)?;
        run.observe(&pos, &fitness);

        // individual movement
        let noise = run.uniform_matrix(n, d);
        let mut cand = pos.clone();
        Zip::from(cand.rows_mut()).and(noise.rows()).for_each(|mut c, u| {
            Zip::from(&mut c)
                .and(&u)
                .and(&span)
                .for_each(|x, &r, &s| *x += step * (2.0 * r - 1.0) * s);
        });
        let cand_fit = run.repair_and_evaluate(&mut cand)?;
        run.observe(&cand, &cand_fit);

        let mut gains = Array1::<f64>::zeros(n);
        let mut moves = Array2::<f64>::zeros((n, d));
        for i in 0..n {
            if cand_fit[i] < fitness[i] {
                gains[i] = fitness[i] - cand_fit[i];
                let delta = &cand.row(i) - &pos.row(i);
                moves.row_mut(i).assign(&delta);
                pos.row_mut(i).assign(&cand.row(i));
                fitness[i] = cand_fit[i];
            }
        }

        feed(&mut weights, &gains, params.min_w, params.w_scale);

        if let Some(drift) = instinctive_drift(&moves, &gains) {
            pos += &drift;
            run.bounds().clip(&mut pos);
        }

        // collective volitive movement
        let total = weights.sum();
        let barycenter = pos.t().dot(&weights) / total;
        let shrink = total > school_weight;
        let r = run.uniform_matrix(n, d);
        let offset = (&pos - &barycenter) * &r * volitive;
        if shrink {
            pos -= &offset;
        } else {
            pos += &offset;
        }
        school_weight = total;

        run.end_iteration();
    }

    run.finish(pos)
}
