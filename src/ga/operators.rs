//! Generic random operators.
//!
//! Building blocks shared by the vocabulary sampler and the population
//! operators. They operate on slices and index ranges, so any gene type
//! can use them.
//!
//! - [`random_element`]: uniform pick that skips blacklisted values
//! - [`sample_indices`]: `k` distinct indices, uniform, without replacement
//! - [`random_index`]: one uniform index into a non-empty range

use rand::seq::{index, IndexedRandom};
use rand::Rng;

/// Picks a uniformly random element of `items` that is not in `blacklist`.
///
/// Returns `None` when `items` is empty or every element is blacklisted.
///
/// # Complexity
/// O(n · m) for `n` items and `m` blacklisted values
pub fn random_element<'a, T: PartialEq, R: Rng>(
    items: &'a [T],
    blacklist: &[T],
    rng: &mut R,
) -> Option<&'a T> {
    let eligible: Vec<&T> = items
        .iter()
        .filter(|item| !blacklist.contains(item))
        .collect();
    eligible.choose(rng).copied()
}

/// Draws `k` distinct indices from `0..len`, uniformly without replacement.
///
/// Returns `None` if `k > len`.
pub fn sample_indices<R: Rng>(len: usize, k: usize, rng: &mut R) -> Option<Vec<usize>> {
    if k > len {
        return None;
    }
    Some(index::sample(rng, len, k).into_vec())
}

/// Returns a uniform index into `0..len`, or `None` for an empty range.
pub fn random_index<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.random_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_element_respects_blacklist() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..20 {
            let picked = random_element(&[1, 2, 3, 4, 5], &[1, 2, 3, 5], &mut rng);
            assert_eq!(picked, Some(&4));
        }
    }

    #[test]
    fn test_random_element_all_blacklisted() {
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(random_element(&["a", "b"], &["b", "a"], &mut rng), None);
    }

    #[test]
    fn test_random_element_empty() {
        let mut rng = StdRng::seed_from_u64(10);
        let empty: [u8; 0] = [];
        assert_eq!(random_element(&empty, &[], &mut rng), None);
    }

    #[test]
    fn test_random_element_covers_all_candidates() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            if let Some(&x) = random_element(&[1, 2, 3], &[], &mut rng) {
                seen.insert(x);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample_indices(10, 7, &mut rng).expect("7 <= 10");
        assert_eq!(picked.len(), 7);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 7);
        assert!(picked.iter().all(|&i| i < 10));
    }

    #[test]
    fn test_sample_indices_too_many() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(sample_indices(3, 4, &mut rng).is_none());
        assert_eq!(sample_indices(0, 0, &mut rng), Some(vec![]));
    }

    #[test]
    fn test_random_index() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_index(0, &mut rng), None);
        assert_eq!(random_index(1, &mut rng), Some(0));
        assert!(random_index(5, &mut rng).is_some_and(|i| i < 5));
    }
}
