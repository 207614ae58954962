use ndarray::{Array1, ArrayView1};
use walkers_landscape::ObjectiveFunction;
use walkers_optimizers::{GsaParams, Optimizer, RunConfigBuilder};

/// Shifted, weighted sphere with its minimum at (1, -2, 3).
struct ShiftedSphere;

impl ObjectiveFunction for ShiftedSphere {
    fn name(&self) -> &str {
        "ShiftedSphere"
    }
    fn dim(&self) -> usize {
        3
    }
    fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
        (Array1::from_elem(3, -5.0), Array1::from_elem(3, 5.0))
    }
    fn evaluate(&self, x: ArrayView1<f64>) -> f64 {
        let target = [1.0, -2.0, 3.0];
        x.iter()
            .zip(target)
            .enumerate()
            .map(|(i, (&xi, t))| (i + 1) as f64 * (xi - t).powi(2))
            .sum()
    }
}

fn main() {
    let objective = ShiftedSphere;
    let config = RunConfigBuilder::for_objective(&objective)
        .population(30)
        .max_iters(200)
        .seed(42)
        .verbose(false)
        .build()
        .expect("valid configuration");

    let gsa = Optimizer::Gsa(GsaParams {
        g0: 50.0,
        ..GsaParams::default()
    });
    let record = gsa.run(&objective, &config).expect("run failed");
    print!("{record}");
    println!("best position: {}", record.best().position);
}
