// Copyright 2025 Lars Brubaker
// License: MIT
//
// Stable index ranking (argsort).
//
// The sweep walks three independently sorted views of its inputs. Rather than
// moving the data, each view is a permutation of positions into the original
// array. Equal keys keep their input order so ties are reproducible.

use crate::geom::Real;

/// Returns the positions of `keys` ordered so that the keys are non-decreasing.
/// Equal keys stay in their original relative order.
pub fn argsort(keys: &[Real]) -> Vec<u32> {
    let mut order: Vec<u32> = (0..keys.len() as u32).collect();
    // stable; keys are finite by the time they get here
    order.sort_by(|&a, &b| keys[a as usize].total_cmp(&keys[b as usize]));
    order
}
