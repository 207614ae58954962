use rand::Rng;
use rand::seq::SliceRandom;

/// Random permutation of `0..n`.
pub(crate) fn permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut idxs: Vec<usize> = (0..n).collect();
    idxs.shuffle(rng);
    idxs
}

/// Two different indices drawn from `0..pool_size`; `pool_size` of one yields `(0, 0)`.
pub(crate) fn distinct_pair<R: Rng + ?Sized>(pool_size: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(pool_size >= 1);
    if pool_size == 1 {
        return (0, 0);
    }
    let a = rng.random_range(0..pool_size);
    let mut b = rng.random_range(0..pool_size - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Index drawn from `0..pool_size` other than `exclude`.
pub(crate) fn other_index<R: Rng + ?Sized>(pool_size: usize, exclude: usize, rng: &mut R) -> usize {
    debug_assert!(pool_size >= 2 && exclude < pool_size);
    let k = rng.random_range(0..pool_size - 1);
    if k >= exclude { k + 1 } else { k }
}
