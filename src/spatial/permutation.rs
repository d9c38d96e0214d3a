//! Index permutations: scrambling, applying, inverting and validating
//!
//! Convention used across the crate: a permutation `order` maps a position
//! to a source index, so `apply(items, order)[i] == items[order[i]]`. A
//! scramble `s` therefore says which original tile sits at each input
//! position, and the reconstruction that undoes it is `inverse(s)`.

use bitvec::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Seeded random permutation of `0..len`
pub fn scramble(len: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(&mut rng);
    order
}

/// Check that `order` holds every index of `0..len` exactly once
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }

    let mut seen = bitvec![0; len];
    for &index in order {
        let visited = seen.get(index).as_deref().copied();
        match visited {
            Some(false) => seen.set(index, true),
            _ => return false,
        }
    }
    true
}

/// Rearrange `items` so that position `i` holds `items[order[i]]`
///
/// Returns `None` if `order` is not a permutation of the item indices.
pub fn apply<T: Clone>(items: &[T], order: &[usize]) -> Option<Vec<T>> {
    if !is_permutation(order, items.len()) {
        return None;
    }
    order.iter().map(|&index| items.get(index).cloned()).collect()
}

/// Inverse permutation: `inverse(order)[order[i]] == i`
///
/// Returns `None` if `order` is not a permutation.
pub fn inverse(order: &[usize]) -> Option<Vec<usize>> {
    if !is_permutation(order, order.len()) {
        return None;
    }

    let mut inverted = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        *inverted.get_mut(index)? = position;
    }
    Some(inverted)
}

/// Reconstruction order that undoes a scramble
///
/// Slot `k` of the answer holds the input position where original tile `k`
/// ended up.
pub fn expected_order(scrambled: &[usize]) -> Option<Vec<usize>> {
    inverse(scrambled)
}
