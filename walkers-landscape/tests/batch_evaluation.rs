use approx::assert_relative_eq;
use ndarray::{Array2, Axis, array};
use walkers_landscape::{ObjectiveFunction, functions::booth, landscape_by_name};

#[test]
fn rows_are_candidates_along_axis_one() {
    let f = landscape_by_name("Booth", 2).unwrap();
    let pop = array![[1.0, 3.0], [0.0, 0.0], [2.0, -1.0]];
    let fit = f.evaluate_batch(pop.view(), Axis(1)).unwrap();
    assert_eq!(fit.len(), 3);
    for (i, row) in pop.rows().into_iter().enumerate() {
        assert_relative_eq!(fit[i], booth(row));
    }
}

#[test]
fn columns_are_candidates_along_axis_zero() {
    let f = landscape_by_name("Rastrigin", 4).unwrap();
    let pop = Array2::from_shape_fn((4, 6), |(i, j)| (i as f64 - j as f64) * 0.3);
    let by_col = f.evaluate_batch(pop.view(), Axis(0)).unwrap();
    let by_row = f.evaluate_batch(pop.t(), Axis(1)).unwrap();
    assert_eq!(by_col.len(), 6);
    assert_eq!(by_col, by_row);
}

#[test]
fn transposed_batch_is_rejected() {
    let f = landscape_by_name("Ackley", 3).unwrap();
    let pop = Array2::<f64>::zeros((5, 3));
    assert!(f.evaluate_batch(pop.view(), Axis(0)).is_err());
}

#[test]
fn boxed_landscapes_are_objectives() {
    let fs: Vec<Box<dyn ObjectiveFunction>> = vec![
        Box::new(landscape_by_name("Sphere", 3).unwrap()),
        Box::new(landscape_by_name("Matyas", 2).unwrap()),
    ];
    for f in &fs {
        let x = ndarray::Array1::zeros(f.dim());
        assert_relative_eq!(f.evaluate(x.view()), 0.0);
    }
}
