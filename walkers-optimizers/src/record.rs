//! The sealed result of one optimization run.

use std::fmt;
use std::io::{Read, Write};
use std::time::{Duration, SystemTime};

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A position and its objective value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSolution {
    /// Position in the search space
    pub position: Array1<f64>,
    /// Objective value at `position`
    pub score: f64,
}

/// Everything one run produced.
///
/// Created by the run harness and sealed when the run completes; all
/// accessors are read-only.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub(crate) optimizer: String,
    pub(crate) objective: String,
    pub(crate) dim: usize,
    pub(crate) n_population: usize,
    pub(crate) max_iters: usize,
    pub(crate) seed: u64,
    pub(crate) hyperparameters: Vec<(String, f64)>,
    pub(crate) start_time: SystemTime,
    pub(crate) end_time: SystemTime,
    pub(crate) execution_time: Duration,
    pub(crate) best: BestSolution,
    pub(crate) trace: Vec<BestSolution>,
    pub(crate) population: Array2<f64>,
    pub(crate) fitness: Array1<f64>,
    pub(crate) warnings: Vec<String>,
}

impl RunRecord {
    /// Optimizer short name, e.g. `"PSO"`.
    pub fn optimizer(&self) -> &str {
        &self.optimizer
    }
    /// Objective name.
    pub fn objective(&self) -> &str {
        &self.objective
    }
    /// Dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }
    /// Population size.
    pub fn n_population(&self) -> usize {
        self.n_population
    }
    /// Iteration budget.
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
    /// Seed of the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// Hyperparameter names and the values actually used.
    pub fn hyperparameters(&self) -> &[(String, f64)] {
        &self.hyperparameters
    }
    /// Wall-clock start.
    pub fn start_time(&self) -> SystemTime {
        self.start_time
    }
    /// Wall-clock end.
    pub fn end_time(&self) -> SystemTime {
        self.end_time
    }
    /// Elapsed time of the run.
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }
    /// Lowest-scoring solution ever observed.
    pub fn best(&self) -> &BestSolution {
        &self.best
    }
    /// Score of [`best`](Self::best).
    pub fn best_score(&self) -> f64 {
        self.best.score
    }
    /// One incumbent snapshot per iteration.
    pub fn trace(&self) -> &[BestSolution] {
        &self.trace
    }
    /// Incumbent score per iteration.
    pub fn trace_scores(&self) -> Array1<f64> {
        self.trace.iter().map(|b| b.score).collect()
    }
    /// Incumbent position per iteration, shape `(max_iters, dim)`.
    pub fn walk(&self) -> Array2<f64> {
        let mut walk = Array2::zeros((self.trace.len(), self.dim));
        for (mut row, b) in walk.rows_mut().into_iter().zip(&self.trace) {
            row.assign(&b.position);
        }
        walk
    }
    /// Final repaired population, shape `(n_population, dim)`.
    pub fn population(&self) -> &Array2<f64> {
        &self.population
    }
    /// Objective value of each final member.
    pub fn fitness(&self) -> &Array1<f64> {
        &self.fitness
    }
    /// Soft corrections applied during the run.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record produced by [`to_json`](Self::to_json).
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize as JSON into `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Read a JSON record from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution of {} algorithm", self.optimizer)?;
        writeln!(
            f,
            "Score function: {} <dim={}, n_pop={}>",
            self.objective, self.dim, self.n_population
        )?;
        writeln!(f, "Best Solution found: {:.3}", self.best.score)?;
        writeln!(
            f,
            "Estimated in {:.3} sec (it={})",
            self.execution_time.as_secs_f64(),
            self.max_iters
        )
    }
}

impl fmt::Debug for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunRecord")
            .field("optimizer", &self.optimizer)
            .field("objective", &self.objective)
            .field("dim", &self.dim)
            .field("n_population", &self.n_population)
            .field("max_iters", &self.max_iters)
            .field("seed", &self.seed)
            .field("best_score", &self.best.score)
            .field("trace", &format!("len={}", self.trace.len()))
            .field(
                "population",
                &format!("{}x{}", self.population.nrows(), self.population.ncols()),
            )
            .field("warnings", &self.warnings)
            .finish()
    }
}
