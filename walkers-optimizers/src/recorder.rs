use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Instant, SystemTime};

use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::record::{BestSolution, RunRecord};

/// Collects the metadata, trace and warnings of a run in progress.
///
/// Sealed into an immutable [`RunRecord`] by [`RunRecorder::seal`].
#[derive(Debug)]
pub struct RunRecorder {
    optimizer: &'static str,
    objective: String,
    dim: usize,
    n_population: usize,
    max_iters: usize,
    seed: u64,
    hyperparameters: Vec<(String, f64)>,
    start_time: SystemTime,
    started: Instant,
    trace: Vec<BestSolution>,
    warnings: Vec<String>,
}

impl RunRecorder {
    /// Start recording; the start timestamp is taken now.
    pub fn start(
        optimizer: &'static str,
        objective: &str,
        dim: usize,
        n_population: usize,
        max_iters: usize,
        seed: u64,
        hyperparameters: Vec<(String, f64)>,
    ) -> Self {
        Self {
            optimizer,
            objective: objective.to_string(),
            dim,
            n_population,
            max_iters,
            seed,
            hyperparameters,
            start_time: SystemTime::now(),
            started: Instant::now(),
            trace: Vec::with_capacity(max_iters),
            warnings: Vec::new(),
        }
    }

    /// Append one incumbent snapshot.
    pub fn record_iteration(&mut self, best: &BestSolution) {
        self.trace.push(best.clone());
    }

    /// Record a soft correction.
    pub fn warn(&mut self, message: String) {
        log::warn!("{}: {}", self.optimizer, message);
        self.warnings.push(message);
    }

    /// Number of snapshots recorded so far.
    pub fn num_iterations(&self) -> usize {
        self.trace.len()
    }

    /// Seconds since the recorder started.
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Seal the record with the final population and best solution.
    pub fn seal(self, best: BestSolution, population: Array2<f64>, fitness: Array1<f64>) -> RunRecord {
        let execution_time = self.started.elapsed();
        RunRecord {
            optimizer: self.optimizer.to_string(),
            objective: self.objective,
            dim: self.dim,
            n_population: self.n_population,
            max_iters: self.max_iters,
            seed: self.seed,
            hyperparameters: self.hyperparameters,
            start_time: self.start_time,
            end_time: self.start_time + execution_time,
            execution_time,
            best,
            trace: self.trace,
            population,
            fitness,
            warnings: self.warnings,
        }
    }
}

/// Write the convergence trace of `record` as CSV.
///
/// One row per iteration: `iteration,x0,..,x{d-1},score`.
pub fn save_trace_csv(record: &RunRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let mut file = BufWriter::new(File::create(path)?);

    write!(file, "iteration,")?;
    for i in 0..record.dim() {
        write!(file, "x{},", i)?;
    }
    writeln!(file, "score")?;

    for (t, b) in record.trace().iter().enumerate() {
        write!(file, "{},", t)?;
        for &xi in &b.position {
            write!(file, "{:.16},", xi)?;
        }
        writeln!(file, "{:.16}", b.score)?;
    }

    file.flush()?;
    Ok(())
}

/// Write the human-readable summary of `record` next to its trace.
pub fn save_summary(record: &RunRecord, path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path)?;
    write!(file, "{}", record)?;
    writeln!(file, "Seed: {}", record.seed())?;
    for (name, value) in record.hyperparameters() {
        writeln!(file, "  {} = {}", name, value)?;
    }
    for w in record.warnings() {
        writeln!(file, "Warning: {}", w)?;
    }
    Ok(())
}
