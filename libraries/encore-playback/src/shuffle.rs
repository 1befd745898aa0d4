//! Seeded shuffle order
//!
//! The order is a permutation of item indices drawn with a Fisher-Yates
//! shuffle from a ChaCha8 stream seeded by the caller, so the same seed over
//! the same collection size yields the same order on every platform and
//! release.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Permutation of `[0, len)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleOrder {
    order: Vec<usize>,
}

impl ShuffleOrder {
    /// Generate the permutation for `len` items from `seed`
    pub fn generate(len: usize, seed: u64) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        order.shuffle(&mut rng);
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Item index at shuffled `position`
    pub fn get(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    /// Shuffled position of item `index`
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == index)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_order() {
        let first = ShuffleOrder::generate(20, 42);
        let second = ShuffleOrder::generate(20, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_usually_differ() {
        // 20! orders; a collision between these two fixed seeds would be a broken RNG
        assert_ne!(ShuffleOrder::generate(20, 1), ShuffleOrder::generate(20, 2));
    }

    #[test]
    fn order_is_a_permutation() {
        let order = ShuffleOrder::generate(10, 7);
        let distinct: HashSet<usize> = order.as_slice().iter().copied().collect();

        assert_eq!(order.len(), 10);
        assert_eq!(distinct, (0..10).collect());
    }

    #[test]
    fn position_of_inverts_get() {
        let order = ShuffleOrder::generate(6, 99);
        for position in 0..6 {
            let index = order.get(position).unwrap();
            assert_eq!(order.position_of(index), Some(position));
        }
        assert_eq!(order.get(6), None);
        assert_eq!(order.position_of(6), None);
    }

    #[test]
    fn empty_collection_yields_empty_order() {
        assert!(ShuffleOrder::generate(0, 3).is_empty());
    }
}
