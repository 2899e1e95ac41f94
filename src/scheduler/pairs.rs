use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::Pair;

/// Number of unordered pairs over `num_items` items
pub fn pair_count(num_items: usize) -> usize {
    num_items * num_items.saturating_sub(1) / 2
}

/// All unordered pairs `(i, j)` with `i < j`, in lexicographic order
pub fn enumerate_pairs(num_items: usize) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(pair_count(num_items));

    for i in 0..num_items {
        for j in (i + 1)..num_items {
            pairs.push(Pair::new(i, j));
        }
    }

    pairs
}

/// Every pair exactly once, in uniformly random order
pub fn shuffled_pairs<R: Rng + ?Sized>(num_items: usize, rng: &mut R) -> Vec<Pair> {
    let mut pairs = enumerate_pairs(num_items);
    pairs.shuffle(rng);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(19), 171);
    }

    #[test]
    fn test_enumeration_covers_every_combination() {
        let pairs = enumerate_pairs(5);
        assert_eq!(pairs.len(), 10);
        assert_eq!(pairs[0], Pair::new(0, 1));
        assert_eq!(pairs[9], Pair::new(3, 4));
        assert!(pairs.iter().all(|p| p.first < p.second));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled: HashSet<Pair> = shuffled_pairs(8, &mut rng).into_iter().collect();
        let expected: HashSet<Pair> = enumerate_pairs(8).into_iter().collect();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let a = shuffled_pairs(10, &mut StdRng::seed_from_u64(7));
        let b = shuffled_pairs(10, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
