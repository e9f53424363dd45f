//! Random instance generation.
//!
//! Every list is an independent uniform permutation of `[0, n)`
//! (Fisher-Yates through `SliceRandom::shuffle`). With a seeded
//! `ChaCha8Rng` the same seed gives the same instance on every platform.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::Instance;

/// Generate a random instance of size `n` from `rng`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use stable_match::io::generate_instance;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let instance = generate_instance(10, &mut rng);
///
/// assert_eq!(instance.size(), 10);
/// ```
pub fn generate_instance<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Instance {
    let proposers = random_table(n, rng);
    let receivers = random_table(n, rng);
    Instance::from_trusted(proposers, receivers)
}

/// Generate a random instance of size `n` from a fixed seed.
pub fn generate_seeded(n: usize, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_instance(n, &mut rng)
}

fn random_table<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Vec<usize>> {
    (0..n)
        .map(|_| {
            let mut list: Vec<usize> = (0..n).collect();
            list.shuffle(rng);
            list
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
