#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// The metaheuristics, one module each.
pub mod algorithms;
/// Box bounds and boundary repair.
pub mod bounds;
/// Run configuration and its builder.
pub mod config;
/// Error types.
pub mod error;
/// Hyperparameter introspection.
pub mod hyperparams;
/// Random-walk statistics of the incumbent trajectory.
pub mod measures;
/// Sealed run results.
pub mod record;
/// Trace recording and export.
pub mod recorder;
/// Optimizer selection by name.
pub mod registry;
/// Benchmark grids.
pub mod suite;

mod argmin;
mod distinct_indices;
mod engine;
mod init_random;

#[cfg(test)]
mod walker_tests;

pub use algorithms::{
    BatParams, BboParams, CfaParams, CsParams, FfaParams, FssParams, GaoParams, GsaParams,
    GwoParams, PsoParams, SsaParams, WoaParams,
};
pub use bounds::Bounds;
pub use config::{RunConfig, RunConfigBuilder};
pub use error::{OptimizerError, Result};
pub use hyperparams::Hyperparameters;
pub use measures::WalkMeasures;
pub use record::{BestSolution, RunRecord};
pub use recorder::{save_summary, save_trace_csv};
pub use registry::{ALL_NAMES, Optimizer};
pub use suite::{BenchmarkSuite, ParallelConfig, SuiteReport, SuiteRun};
