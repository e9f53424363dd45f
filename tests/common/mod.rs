//! Shared helpers for integration tests.

#![allow(dead_code)]

use stable_match::engine::is_stable;
use stable_match::io::generate_seeded;
use stable_match::{Instance, Pair};

/// All permutations of `[0, n)` (Heap's algorithm, iterative).
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut result = vec![current.clone()];
    let mut counters = vec![0; n];

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                current.swap(0, i);
            } else {
                current.swap(counters[i], i);
            }
            result.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    result
}

/// Every stable matching of `instance`, found by trying all `n!` pairings.
///
/// Each matching is listed in receiver order, like the engine output.
/// Only practical for n <= 6.
pub fn all_stable_matchings(instance: &Instance) -> Vec<Vec<Pair>> {
    let n = instance.size();
    assert!(n <= 6, "brute force is only meant for small instances");

    permutations(n)
        .into_iter()
        .map(|assignment| {
            // assignment[r] = proposer matched to receiver r
            assignment
                .iter()
                .enumerate()
                .map(|(receiver, &proposer)| Pair::new(proposer, receiver))
                .collect::<Vec<_>>()
        })
        .filter(|pairs| is_stable(instance, pairs))
        .collect()
}

/// Position of `target` in `list`.
pub fn position(list: &[usize], target: usize) -> usize {
    list.iter()
        .position(|&x| x == target)
        .expect("preference lists are permutations")
}

/// Deterministic random instance for a (size, seed) pair.
pub fn random_instance(n: usize, seed: u64) -> Instance {
    generate_seeded(n, seed)
}
