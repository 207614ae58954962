//! Name-based selection of an optimizer and its hyperparameters.

use std::fmt;
use std::str::FromStr;

use walkers_landscape::ObjectiveFunction;

use crate::algorithms::*;
use crate::config::RunConfig;
use crate::error::{OptimizerError, Result};
use crate::hyperparams::Hyperparameters;
use crate::record::RunRecord;

/// Short names of every optimizer, in registry order.
pub const ALL_NAMES: &[&str] = &[
    "PSO", "GWO", "CS", "BAT", "WOA", "FFA", "BBO", "GAO", "GSA", "SSA", "CFA", "FSS",
];

/// An optimizer together with its hyperparameters.
///
/// Parsed from its short name (case-insensitive) with default
/// hyperparameters:
///
/// ```rust
/// use walkers_optimizers::Optimizer;
///
/// let opt: Optimizer = "gwo".parse().unwrap();
/// assert_eq!(opt.name(), "GWO");
/// assert!("mfo".parse::<Optimizer>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Optimizer {
    /// Particle swarm optimization
    Pso(PsoParams),
    /// Grey wolf optimizer
    Gwo(GwoParams),
    /// Cuckoo search
    Cs(CsParams),
    /// Bat algorithm
    Bat(BatParams),
    /// Whale optimization algorithm
    Woa(WoaParams),
    /// Firefly algorithm
    Ffa(FfaParams),
    /// Biogeography-based optimization
    Bbo(BboParams),
    /// Genetic algorithm
    Gao(GaoParams),
    /// Gravitational search algorithm
    Gsa(GsaParams),
    /// Salp swarm algorithm
    Ssa(SsaParams),
    /// Cuttlefish algorithm
    Cfa(CfaParams),
    /// Fish school search
    Fss(FssParams),
}

impl Optimizer {
    /// Every optimizer with default hyperparameters, in [`ALL_NAMES`] order.
    pub fn all() -> Vec<Optimizer> {
        vec![
            Optimizer::Pso(PsoParams::default()),
            Optimizer::Gwo(GwoParams::default()),
            Optimizer::Cs(CsParams::default()),
            Optimizer::Bat(BatParams::default()),
            Optimizer::Woa(WoaParams::default()),
            Optimizer::Ffa(FfaParams::default()),
            Optimizer::Bbo(BboParams::default()),
            Optimizer::Gao(GaoParams::default()),
            Optimizer::Gsa(GsaParams::default()),
            Optimizer::Ssa(SsaParams::default()),
            Optimizer::Cfa(CfaParams::default()),
            Optimizer::Fss(FssParams::default()),
        ]
    }

    /// Short name, e.g. `"PSO"`.
    pub fn name(&self) -> &'static str {
        match self {
            Optimizer::Pso(_) => PsoParams::OPTIMIZER,
            Optimizer::Gwo(_) => GwoParams::OPTIMIZER,
            Optimizer::Cs(_) => CsParams::OPTIMIZER,
            Optimizer::Bat(_) => BatParams::OPTIMIZER,
            Optimizer::Woa(_) => WoaParams::OPTIMIZER,
            Optimizer::Ffa(_) => FfaParams::OPTIMIZER,
            Optimizer::Bbo(_) => BboParams::OPTIMIZER,
            Optimizer::Gao(_) => GaoParams::OPTIMIZER,
            Optimizer::Gsa(_) => GsaParams::OPTIMIZER,
            Optimizer::Ssa(_) => SsaParams::OPTIMIZER,
            Optimizer::Cfa(_) => CfaParams::OPTIMIZER,
            Optimizer::Fss(_) => FssParams::OPTIMIZER,
        }
    }

    /// Hyperparameter names in flat-vector order.
    pub fn hyperparameter_names(&self) -> &'static [&'static str] {
        match self {
            Optimizer::Pso(_) => PsoParams::NAMES,
            Optimizer::Gwo(_) => GwoParams::NAMES,
            Optimizer::Cs(_) => CsParams::NAMES,
            Optimizer::Bat(_) => BatParams::NAMES,
            Optimizer::Woa(_) => WoaParams::NAMES,
            Optimizer::Ffa(_) => FfaParams::NAMES,
            Optimizer::Bbo(_) => BboParams::NAMES,
            Optimizer::Gao(_) => GaoParams::NAMES,
            Optimizer::Gsa(_) => GsaParams::NAMES,
            Optimizer::Ssa(_) => SsaParams::NAMES,
            Optimizer::Cfa(_) => CfaParams::NAMES,
            Optimizer::Fss(_) => FssParams::NAMES,
        }
    }

    /// Current hyperparameter values, without running anything.
    pub fn hyperparameters(&self) -> Vec<f64> {
        match self {
            Optimizer::Pso(p) => p.values(),
            Optimizer::Gwo(p) => p.values(),
            Optimizer::Cs(p) => p.values(),
            Optimizer::Bat(p) => p.values(),
            Optimizer::Woa(p) => p.values(),
            Optimizer::Ffa(p) => p.values(),
            Optimizer::Bbo(p) => p.values(),
            Optimizer::Gao(p) => p.values(),
            Optimizer::Gsa(p) => p.values(),
            Optimizer::Ssa(p) => p.values(),
            Optimizer::Cfa(p) => p.values(),
            Optimizer::Fss(p) => p.values(),
        }
    }

    /// Same optimizer rebuilt from a flat hyperparameter vector.
    ///
    /// # Errors
    ///
    /// `HyperparameterLayout` on a length mismatch, `InvalidHyperparameter`
    /// on an out-of-range value.
    pub fn with_hyperparameters(&self, values: &[f64]) -> Result<Self> {
        Ok(match self {
            Optimizer::Pso(_) => Optimizer::Pso(PsoParams::from_values(values)?),
            Optimizer::Gwo(_) => Optimizer::Gwo(GwoParams::from_values(values)?),
            Optimizer::Cs(_) => Optimizer::Cs(CsParams::from_values(values)?),
            Optimizer::Bat(_) => Optimizer::Bat(BatParams::from_values(values)?),
            Optimizer::Woa(_) => Optimizer::Woa(WoaParams::from_values(values)?),
            Optimizer::Ffa(_) => Optimizer::Ffa(FfaParams::from_values(values)?),
            Optimizer::Bbo(_) => Optimizer::Bbo(BboParams::from_values(values)?),
            Optimizer::Gao(_) => Optimizer::Gao(GaoParams::from_values(values)?),
            Optimizer::Gsa(_) => Optimizer::Gsa(GsaParams::from_values(values)?),
            Optimizer::Ssa(_) => Optimizer::Ssa(SsaParams::from_values(values)?),
            Optimizer::Cfa(_) => Optimizer::Cfa(CfaParams::from_values(values)?),
            Optimizer::Fss(_) => Optimizer::Fss(FssParams::from_values(values)?),
        })
    }

    /// Set one hyperparameter by name and re-validate.
    pub fn set_hyperparameter(&mut self, name: &str, value: f64) -> Result<()> {
        match self {
            Optimizer::Pso(p) => set_checked(p, name, value),
            Optimizer::Gwo(p) => set_checked(p, name, value),
            Optimizer::Cs(p) => set_checked(p, name, value),
            Optimizer::Bat(p) => set_checked(p, name, value),
            Optimizer::Woa(p) => set_checked(p, name, value),
            Optimizer::Ffa(p) => set_checked(p, name, value),
            Optimizer::Bbo(p) => set_checked(p, name, value),
            Optimizer::Gao(p) => set_checked(p, name, value),
            Optimizer::Gsa(p) => set_checked(p, name, value),
            Optimizer::Ssa(p) => set_checked(p, name, value),
            Optimizer::Cfa(p) => set_checked(p, name, value),
            Optimizer::Fss(p) => set_checked(p, name, value),
        }
    }

    /// Minimize `objective` under `config`.
    pub fn run(&self, objective: &dyn ObjectiveFunction, config: &RunConfig) -> Result<RunRecord> {
        match self {
            Optimizer::Pso(p) => pso(objective, config, p),
            Optimizer::Gwo(p) => gwo(objective, config, p),
            Optimizer::Cs(p) => cs(objective, config, p),
            Optimizer::Bat(p) => bat(objective, config, p),
            Optimizer::Woa(p) => woa(objective, config, p),
            Optimizer::Ffa(p) => ffa(objective, config, p),
            Optimizer::Bbo(p) => bbo(objective, config, p),
            Optimizer::Gao(p) => gao(objective, config, p),
            Optimizer::Gsa(p) => gsa(objective, config, p),
            Optimizer::Ssa(p) => ssa(objective, config, p),
            Optimizer::Cfa(p) => cfa(objective, config, p),
            Optimizer::Fss(p) => fss(objective, config, p),
        }
    }
}

/// Set on a copy so a rejected value leaves `params` untouched.
fn set_checked<P: Hyperparameters>(params: &mut P, name: &str, value: f64) -> Result<()> {
    let mut next = params.clone();
    next.set(name, value)?;
    next.validate()?;
    *params = next;
    Ok(())
}

impl FromStr for Optimizer {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Optimizer::all()
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OptimizerError::UnknownOptimizer {
                name: s.to_string(),
                available: ALL_NAMES.join(", "),
            })
    }
}

impl fmt::Display for Optimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, (name, value)) in self
            .hyperparameter_names()
            .iter()
            .zip(self.hyperparameters())
            .enumerate()
        {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, ")")
    }
}
