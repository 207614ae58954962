use ndarray::Array2;
use rand::Rng;

use crate::bounds::Bounds;

/// Draw `npop` members uniformly inside `bounds`, row by row.
pub(crate) fn init_random<R: Rng + ?Sized>(bounds: &Bounds, npop: usize, rng: &mut R) -> Array2<f64> {
    let (lower, upper) = (bounds.lower(), bounds.upper());
    let mut pop = Array2::<f64>::zeros((npop, bounds.dim()));
    for i in 0..npop {
        for j in 0..bounds.dim() {
            let u: f64 = rng.random::<f64>();
            pop[(i, j)] = lower[j] + u * (upper[j] - lower[j]);
        }
    }
    pop
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_init_random_inside_bounds_and_seeded() {
        let b = Bounds::new(array![-2.0, 10.0, 0.0], array![2.0, 20.0, 1e-3]).unwrap();
        let pop = init_random(&b, 64, &mut StdRng::seed_from_u64(9));
        assert_eq!(pop.dim(), (64, 3));
        assert!(b.contains_all(&pop));
        let again = init_random(&b, 64, &mut StdRng::seed_from_u64(9));
        assert_eq!(pop, again);
    }
}
