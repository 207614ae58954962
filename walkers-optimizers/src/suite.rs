//! Benchmark grids of optimizer × landscape × seed.
//!
//! Every run owns its random stream, so the grid can be executed on the
//! rayon pool or sequentially with identical records.

use std::fmt;

use rayon::prelude::*;
use walkers_landscape::ObjectiveFunction;

use crate::config::RunConfigBuilder;
use crate::error::Result;
use crate::record::RunRecord;
use crate::registry::Optimizer;

/// Parallel execution of the grid.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Run grid cells on the rayon pool
    pub enabled: bool,
    /// Number of threads to use (None = use rayon default)
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None,
        }
    }
}

/// One finished grid cell.
#[derive(Debug, Clone)]
pub struct SuiteRun {
    /// Full record of the run
    pub record: RunRecord,
    /// Distance from the best position to the nearest known minimizer
    pub distance_to_minimum: Option<f64>,
}

/// Results of a [`BenchmarkSuite`], in grid order (optimizer, then
/// landscape, then seed).
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// One entry per grid cell
    pub runs: Vec<SuiteRun>,
}

/// A grid of runs sharing population size and iteration budget.
///
/// Bounds come from each landscape's domain.
pub struct BenchmarkSuite {
    optimizers: Vec<Optimizer>,
    objectives: Vec<Box<dyn ObjectiveFunction>>,
    seeds: Vec<u64>,
    n_population: usize,
    max_iters: usize,
    parallel: ParallelConfig,
}

impl Default for BenchmarkSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkSuite {
    /// Empty grid; 30 members, 100 iterations, seed 0.
    pub fn new() -> Self {
        Self {
            optimizers: Vec::new(),
            objectives: Vec::new(),
            seeds: vec![0],
            n_population: 30,
            max_iters: 100,
            parallel: ParallelConfig::default(),
        }
    }

    /// Add an optimizer.
    pub fn optimizer(mut self, optimizer: Optimizer) -> Self {
        self.optimizers.push(optimizer);
        self
    }

    /// Add an objective.
    pub fn objective<F: ObjectiveFunction + 'static>(mut self, objective: F) -> Self {
        self.objectives.push(Box::new(objective));
        self
    }

    /// Replace the seed list.
    pub fn seeds<I: IntoIterator<Item = u64>>(mut self, seeds: I) -> Self {
        self.seeds = seeds.into_iter().collect();
        self
    }

    /// Population size of every run.
    pub fn population(mut self, n: usize) -> Self {
        self.n_population = n;
        self
    }

    /// Iteration budget of every run.
    pub fn max_iters(mut self, t: usize) -> Self {
        self.max_iters = t;
        self
    }

    /// Parallel execution settings.
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of grid cells.
    pub fn len(&self) -> usize {
        self.optimizers.len() * self.objectives.len() * self.seeds.len()
    }

    /// `true` if the grid has no cell.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cells(&self) -> Vec<(usize, usize, u64)> {
        let mut cells = Vec::with_capacity(self.len());
        for o in 0..self.optimizers.len() {
            for f in 0..self.objectives.len() {
                for &seed in &self.seeds {
                    cells.push((o, f, seed));
                }
            }
        }
        cells
    }

    fn run_cell(&self, (o, f, seed): (usize, usize, u64)) -> Result<SuiteRun> {
        let objective = self.objectives[f].as_ref();
        let config = RunConfigBuilder::for_objective(objective)
            .population(self.n_population)
            .max_iters(self.max_iters)
            .seed(seed)
            .build()?;
        let record = self.optimizers[o].run(objective, &config)?;
        let distance_to_minimum = objective.minimum().distance_to(record.best().position.view());
        log::debug!(
            "{} on {} (seed {}): best {:.6e}",
            record.optimizer(),
            record.objective(),
            seed,
            record.best_score()
        );
        Ok(SuiteRun {
            record,
            distance_to_minimum,
        })
    }

    /// Run every cell; the first failing cell aborts the suite.
    pub fn run(&self) -> Result<SuiteReport> {
        let cells = self.cells();
        log::info!(
            "benchmark suite: {} optimizers x {} objectives x {} seeds",
            self.optimizers.len(),
            self.objectives.len(),
            self.seeds.len()
        );

        let runs = if self.parallel.enabled && cells.len() > 1 {
            if let Some(n) = self.parallel.num_threads {
                // Ignore error if global pool already set
                let _ = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build_global();
            }
            cells
                .into_par_iter()
                .map(|cell| self.run_cell(cell))
                .collect::<Result<Vec<_>>>()?
        } else {
            cells
                .into_iter()
                .map(|cell| self.run_cell(cell))
                .collect::<Result<Vec<_>>>()?
        };
        Ok(SuiteReport { runs })
    }
}

impl SuiteReport {
    /// Runs of one optimizer, by short name.
    pub fn for_optimizer<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SuiteRun> + 'a {
        self.runs.iter().filter(move |r| r.record.optimizer() == name)
    }

    /// Mean best score per (optimizer, objective) pair, in grid order.
    pub fn mean_best_scores(&self) -> Vec<(String, String, f64)> {
        let mut out: Vec<(String, String, f64, usize)> = Vec::new();
        for run in &self.runs {
            let (opt, obj) = (run.record.optimizer(), run.record.objective());
            match out.iter_mut().find(|(o, f, _, _)| o == opt && f == obj) {
                Some(entry) => {
                    entry.2 += run.record.best_score();
                    entry.3 += 1;
                }
                None => out.push((opt.to_string(), obj.to_string(), run.record.best_score(), 1)),
            }
        }
        out.into_iter()
            .map(|(o, f, total, count)| (o, f, total / count as f64))
            .collect()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<5} {:<16} {:>4} {:>6} {:>14} {:>12} {:>9}",
            "opt", "objective", "dim", "seed", "best", "distance", "time (s)"
        )?;
        for run in &self.runs {
            let r = &run.record;
            let distance = run
                .distance_to_minimum
                .map_or_else(|| "-".to_string(), |d| format!("{:.4e}", d));
            writeln!(
                f,
                "{:<5} {:<16} {:>4} {:>6} {:>14.6e} {:>12} {:>9.3}",
                r.optimizer(),
                r.objective(),
                r.dim(),
                r.seed(),
                r.best_score(),
                distance,
                r.execution_time().as_secs_f64()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkers_landscape::landscape_by_name;

    fn small_suite(parallel: bool) -> BenchmarkSuite {
        BenchmarkSuite::new()
            .optimizer("PSO".parse().unwrap())
            .optimizer("GWO".parse().unwrap())
            .objective(landscape_by_name("Sphere", 2).unwrap())
            .objective(landscape_by_name("Booth", 2).unwrap())
            .seeds([1, 2])
            .population(10)
            .max_iters(20)
            .parallel(ParallelConfig {
                enabled: parallel,
                num_threads: None,
            })
    }

    #[test]
    fn test_grid_order_and_size() {
        let suite = small_suite(false);
        assert_eq!(suite.len(), 8);
        let report = suite.run().unwrap();
        let labels: Vec<(&str, &str, u64)> = report
            .runs
            .iter()
            .map(|r| (r.record.optimizer(), r.record.objective(), r.record.seed()))
            .collect();
        assert_eq!(labels[0], ("PSO", "Sphere", 1));
        assert_eq!(labels[1], ("PSO", "Sphere", 2));
        assert_eq!(labels[2], ("PSO", "Booth", 1));
        assert_eq!(labels[7], ("GWO", "Booth", 2));
        assert!(report.runs.iter().all(|r| r.distance_to_minimum.is_some()));
        assert_eq!(report.mean_best_scores().len(), 4);
        assert_eq!(report.for_optimizer("GWO").count(), 4);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seq = small_suite(false).run().unwrap();
        let par = small_suite(true).run().unwrap();
        for (a, b) in seq.runs.iter().zip(&par.runs) {
            assert_eq!(a.record.trace(), b.record.trace());
            assert_eq!(a.record.best(), b.record.best());
            assert_eq!(a.record.population(), b.record.population());
        }
    }

    #[test]
    fn test_report_table() {
        let report = small_suite(false).run().unwrap();
        let text = report.to_string();
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().nth(1).unwrap().starts_with("PSO"));
    }
}
