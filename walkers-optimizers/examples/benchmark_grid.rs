use walkers_landscape::landscape_by_name;
use walkers_optimizers::{BenchmarkSuite, Optimizer, ParallelConfig};

fn main() {
    env_logger::init();

    let mut suite = BenchmarkSuite::new()
        .objective(landscape_by_name("Ackley", 5).expect("Ackley accepts 5 dimensions"))
        .objective(landscape_by_name("Rastrigin", 5).expect("Rastrigin accepts 5 dimensions"))
        .objective(landscape_by_name("Himmelblau", 2).expect("Himmelblau is 2D"))
        .seeds(0..5)
        .population(40)
        .max_iters(300)
        .parallel(ParallelConfig::default());
    for opt in Optimizer::all() {
        suite = suite.optimizer(opt);
    }

    let report = suite.run().expect("benchmark grid failed");
    println!("{report}");

    println!("Mean best score:");
    for (opt, objective, mean) in report.mean_best_scores() {
        println!("  {:<5} {:<12} {:.6e}", opt, objective, mean);
    }
}
