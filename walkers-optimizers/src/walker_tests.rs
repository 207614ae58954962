//! Properties every optimizer must satisfy, checked through the registry.

use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::{Array1, Array2, ArrayView1};
use walkers_landscape::{Landscape, ObjectiveFunction, landscape_by_name};

use crate::config::{RunConfig, RunConfigBuilder};
use crate::record::RunRecord;
use crate::registry::Optimizer;

/// Wraps a landscape and counts evaluations.
struct Counting {
    inner: Landscape,
    calls: AtomicUsize,
}

impl Counting {
    fn new(name: &str, dim: usize) -> Self {
        Self {
            inner: landscape_by_name(name, dim).unwrap(),
            calls: AtomicUsize::new(0),
        }
    }
    fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ObjectiveFunction for Counting {
    fn name(&self) -> &str {
        self.inner.name()
    }
    fn dim(&self) -> usize {
        self.inner.dim()
    }
    fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
        self.inner.bounds()
    }
    fn evaluate(&self, x: ArrayView1<f64>) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.evaluate(x)
    }
}

/// Objective that turns NaN away from the origin.
struct NanOutside;

impl ObjectiveFunction for NanOutside {
    fn name(&self) -> &str {
        "NanOutside"
    }
    fn dim(&self) -> usize {
        2
    }
    fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
        (Array1::from_elem(2, -1.0), Array1::from_elem(2, 1.0))
    }
    fn evaluate(&self, x: ArrayView1<f64>) -> f64 {
        if x.iter().any(|v| v.abs() > 0.5) { f64::NAN } else { x.dot(&x) }
    }
}

fn config(f: &dyn ObjectiveFunction, seed: u64) -> RunConfig {
    RunConfigBuilder::for_objective(f)
        .population(12)
        .max_iters(25)
        .seed(seed)
        .build()
        .unwrap()
}

fn run_all(name: &str, dim: usize, seed: u64) -> Vec<RunRecord> {
    let f = landscape_by_name(name, dim).unwrap();
    let cfg = config(&f, seed);
    Optimizer::all()
        .iter()
        .map(|opt| {
            opt.run(&f, &cfg)
                .unwrap_or_else(|e| panic!("{} failed on {}: {}", opt.name(), name, e))
        })
        .collect()
}

#[test]
fn test_traces_are_monotone_and_complete() {
    for rec in run_all("Rastrigin", 3, 1) {
        let scores = rec.trace_scores();
        assert_eq!(scores.len(), 25, "{}", rec.optimizer());
        for w in scores.windows(2) {
            assert!(w[1] <= w[0], "{} trace increased: {} -> {}", rec.optimizer(), w[0], w[1]);
        }
        assert!(rec.best_score() <= scores[24], "{}", rec.optimizer());
    }
}

#[test]
fn test_final_population_is_in_bounds() {
    let f = landscape_by_name("Schwefel", 4).unwrap();
    let cfg = config(&f, 3);
    for opt in Optimizer::all() {
        let rec = opt.run(&f, &cfg).unwrap();
        assert_eq!(rec.population().dim(), (12, 4), "{}", opt.name());
        assert!(cfg.bounds().contains_all(rec.population()), "{} left the box", opt.name());
        assert_eq!(rec.fitness().len(), 12);
        for (row, &fit) in rec.population().rows().into_iter().zip(rec.fitness()) {
            assert_eq!(f.evaluate(row), fit, "{}", opt.name());
        }
    }
}

#[test]
fn test_same_seed_same_run() {
    let a = run_all("Ackley", 2, 42);
    let b = run_all("Ackley", 2, 42);
    for (ra, rb) in a.iter().zip(&b) {
        assert_eq!(ra.trace(), rb.trace(), "{}", ra.optimizer());
        assert_eq!(ra.best(), rb.best(), "{}", ra.optimizer());
        assert_eq!(ra.population(), rb.population(), "{}", ra.optimizer());
    }
}

#[test]
fn test_verbosity_does_not_change_the_trajectory() {
    let f = landscape_by_name("Sphere", 2).unwrap();
    let quiet = config(&f, 5);
    let loud = RunConfigBuilder::for_objective(&f)
        .population(12)
        .max_iters(25)
        .seed(5)
        .verbose(true)
        .build()
        .unwrap();
    for opt in Optimizer::all() {
        let a = opt.run(&f, &quiet).unwrap();
        let b = opt.run(&f, &loud).unwrap();
        assert_eq!(a.trace(), b.trace(), "{}", opt.name());
    }
}

#[test]
fn test_record_metadata() {
    for (opt, rec) in Optimizer::all().iter().zip(run_all("Sphere", 2, 0)) {
        assert_eq!(rec.optimizer(), opt.name());
        assert_eq!(rec.objective(), "Sphere");
        assert_eq!(rec.dim(), 2);
        assert_eq!(rec.n_population(), 12);
        assert_eq!(rec.max_iters(), 25);
        let names: Vec<&str> = rec.hyperparameters().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, opt.hyperparameter_names());
        assert!(rec.end_time() >= rec.start_time());
        assert!(rec.to_string().starts_with(&format!("Solution of {} algorithm", opt.name())));
    }
}

#[test]
fn test_json_round_trip() {
    for rec in run_all("Booth", 2, 9) {
        let text = rec.to_json().unwrap();
        let back = RunRecord::from_json(&text).unwrap();
        assert_eq!(back, rec, "{}", rec.optimizer());
    }
}

#[test]
fn test_transposed_initial_population_is_rejected_before_any_evaluation() {
    let f = Counting::new("Sphere", 3);
    let err = RunConfigBuilder::for_objective(&f)
        .population(4)
        .initial_population(Array2::zeros((5, 3)))
        .build()
        .unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(f.calls(), 0);
}

#[test]
fn test_initial_population_is_used() {
    let f = Counting::new("Sphere", 2);
    let start = Array2::from_elem((6, 2), 0.25);
    let cfg = RunConfigBuilder::for_objective(&f)
        .population(6)
        .max_iters(1)
        .initial_population(start)
        .build()
        .unwrap();
    let rec: RunRecord = "GWO".parse::<Optimizer>().unwrap().run(&f, &cfg).unwrap();
    // first trace entry is the best of the supplied population
    assert_eq!(rec.trace()[0].score, 0.125);
    assert!(f.calls() >= 12);
}

#[test]
fn test_cuckoo_search_evaluation_budget() {
    let f = Counting::new("Sphere", 3);
    let cfg = config(&f, 4);
    "CS".parse::<Optimizer>().unwrap().run(&f, &cfg).unwrap();
    // initial nests, two candidate batches per iteration, final population
    let (n, t) = (cfg.n_population(), cfg.max_iters());
    assert_eq!(f.calls(), n + 2 * n * t + n);
}

#[test]
fn test_invalid_hyperparameters_fail_before_evaluation() {
    let f = Counting::new("Sphere", 2);
    let cfg = config(&f, 0);
    let mut cs: Optimizer = "CS".parse().unwrap();
    assert!(cs.set_hyperparameter("beta", 2.5).is_err());
    let cs = cs.with_hyperparameters(&[0.25, 2.5]);
    assert!(cs.unwrap_err().is_configuration_error());

    let bad = crate::algorithms::CsParams { pa: 0.25, beta: 2.5 };
    let err = crate::algorithms::cs(&f, &cfg, &bad).unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(f.calls(), 0);
}

#[test]
fn test_dimension_mismatch_is_a_configuration_error() {
    let f = landscape_by_name("Sphere", 3).unwrap();
    let cfg = RunConfigBuilder::new().dim(2).build().unwrap();
    for opt in Optimizer::all() {
        assert!(opt.run(&f, &cfg).unwrap_err().is_configuration_error(), "{}", opt.name());
    }
}

#[test]
fn test_non_finite_objective_aborts() {
    let cfg = RunConfigBuilder::for_objective(&NanOutside)
        .population(8)
        .max_iters(5)
        .build()
        .unwrap();
    for opt in Optimizer::all() {
        let err = opt.run(&NanOutside, &cfg).unwrap_err();
        assert!(err.is_numerical_degeneracy(), "{}: {}", opt.name(), err);
    }
}
