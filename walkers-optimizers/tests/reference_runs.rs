use std::fs::File;
use std::io::{BufReader, BufWriter};

use walkers_landscape::{ObjectiveFunction, landscape_by_name};
use walkers_optimizers::{
    BenchmarkSuite, Optimizer, ParallelConfig, RunConfigBuilder, RunRecord, WalkMeasures,
    save_trace_csv,
};

#[test]
fn pso_on_ackley_2d() {
    let f = landscape_by_name("Ackley", 2).unwrap();
    let cfg = RunConfigBuilder::new()
        .bounds(-32.768, 32.768)
        .dim(2)
        .population(50)
        .max_iters(200)
        .seed(42)
        .build()
        .unwrap();
    let rec = "PSO".parse::<Optimizer>().unwrap().run(&f, &cfg).unwrap();
    assert_eq!(rec.trace().len(), 200);
    assert!(rec.best_score() < 1.0, "best={}", rec.best_score());
}

#[test]
fn gwo_on_booth() {
    let f = landscape_by_name("Booth", 2).unwrap();
    let cfg = RunConfigBuilder::new()
        .bounds(-10.0, 10.0)
        .dim(2)
        .population(30)
        .max_iters(100)
        .seed(7)
        .build()
        .unwrap();
    let rec = "GWO".parse::<Optimizer>().unwrap().run(&f, &cfg).unwrap();
    assert!(rec.best_score() < 1e-3, "best={}", rec.best_score());
    let d = f.minimum().distance_to(rec.best().position.view()).unwrap();
    assert!(d < 0.1, "distance={}", d);
}

#[test]
fn record_survives_a_file_round_trip() {
    let f = landscape_by_name("Himmelblau", 2).unwrap();
    let cfg = RunConfigBuilder::for_objective(&f)
        .population(20)
        .max_iters(30)
        .seed(3)
        .build()
        .unwrap();
    let rec = "WOA".parse::<Optimizer>().unwrap().run(&f, &cfg).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("woa.json");
    rec.to_writer(BufWriter::new(File::create(&path).unwrap())).unwrap();
    let back = RunRecord::from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(back.best(), rec.best());
    assert_eq!(back.trace(), rec.trace());
    assert_eq!(back.population(), rec.population());

    let csv = dir.path().join("woa.csv");
    save_trace_csv(&rec, &csv).unwrap();
    let text = std::fs::read_to_string(&csv).unwrap();
    assert_eq!(text.lines().count(), 31);
}

#[test]
fn walk_measures_follow_the_trace() {
    let f = landscape_by_name("Sphere", 3).unwrap();
    let cfg = RunConfigBuilder::for_objective(&f)
        .population(20)
        .max_iters(40)
        .seed(1)
        .build()
        .unwrap();
    let rec = "SSA".parse::<Optimizer>().unwrap().run(&f, &cfg).unwrap();
    let m = WalkMeasures::from_record(&rec);
    assert_eq!(m.velocity.dim(), (39, 3));
    assert_eq!(m.msd.len(), 40);
    assert_eq!(m.msd[0], 0.0);
    assert!(m.mean_speed >= 0.0);
}

#[test]
fn suite_over_every_optimizer() {
    let mut suite = BenchmarkSuite::new()
        .objective(landscape_by_name("Sphere", 2).unwrap())
        .seeds([0, 1])
        .population(10)
        .max_iters(10)
        .parallel(ParallelConfig::default());
    for opt in Optimizer::all() {
        suite = suite.optimizer(opt);
    }
    let report = suite.run().unwrap();
    assert_eq!(report.runs.len(), 24);
    assert!(report.runs.iter().all(|r| r.record.best_score().is_finite()));
}
