//! Unbiased shuffle primitive used by card building and the caller.

use rand::Rng;

/// Returns a uniformly random permutation of `items`, leaving the input
/// untouched. Fisher-Yates: walk from the last index down, swapping each
/// position with a uniformly chosen one at or below it.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

/// In-place Fisher-Yates over a mutable slice.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
