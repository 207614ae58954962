//! One module per metaheuristic. Every entry point has the signature
//! `fn(&dyn ObjectiveFunction, &RunConfig, &Params) -> Result<RunRecord>`.

/// Bat algorithm.
pub mod bat;
/// Biogeography-based optimization.
pub mod bbo;
/// Cuttlefish algorithm.
pub mod cfa;
/// Cuckoo search.
pub mod cs;
/// Firefly algorithm.
pub mod ffa;
/// Fish school search.
pub mod fss;
/// Genetic algorithm.
pub mod gao;
/// Gravitational search algorithm.
pub mod gsa;
/// Grey wolf optimizer.
pub mod gwo;
/// Particle swarm optimization.
pub mod pso;
/// Salp swarm algorithm.
pub mod ssa;
/// Whale optimization algorithm.
pub mod woa;

pub use bat::{BatParams, bat};
pub use bbo::{BboParams, bbo};
pub use cfa::{CfaParams, cfa};
pub use cs::{CsParams, cs};
pub use ffa::{FfaParams, ffa};
pub use fss::{FssParams, fss};
pub use gao::{GaoParams, gao};
pub use gsa::{GsaParams, gsa};
pub use gwo::{GwoParams, gwo};
pub use pso::{PsoParams, pso};
pub use ssa::{SsaParams, ssa};
pub use woa::{WoaParams, woa};
